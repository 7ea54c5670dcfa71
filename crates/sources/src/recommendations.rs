//! Provider-native recommendations for a movie.

use std::sync::Arc;

use anyhow::Context;
use catalog::Movie;
use provider::MetadataProvider;
use tracing::{instrument, warn};

use crate::outcome::Outcome;

pub const DEFAULT_LIMIT: usize = 5;

/// Re-fetches a movie's full record and passes its recommendation list
/// through unchanged (apart from the limit)
pub struct ProviderRecommendations<P> {
    provider: Arc<P>,
    limit: usize,
}

impl<P: MetadataProvider> ProviderRecommendations<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            limit: DEFAULT_LIMIT,
        }
    }

    #[instrument(skip(self, movie), fields(movie_id = movie.id))]
    pub async fn for_movie(&self, movie: &Movie) -> Outcome<Vec<Movie>> {
        let record = self
            .provider
            .fetch_movie(movie.id)
            .await
            .with_context(|| format!("Fetching recommendations for '{}'", movie.title));

        match record {
            Ok(record) => {
                let mut movies = record.recommendations;
                movies.truncate(self.limit);
                Outcome::from_movies(movies)
            }
            Err(e) => {
                warn!("{:#}", e);
                Outcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::MovieRecord;
    use provider::StaticProvider;

    fn provider() -> StaticProvider {
        let recommendations = (10..20).map(|i| Movie::new(i, format!("Rec {}", i))).collect();
        StaticProvider::new()
            .with_record(MovieRecord::new(Movie::new(1, "Alien")).with_recommendations(recommendations))
            .with_movie(Movie::new(2, "Obscure"))
            .failing_fetch(3)
    }

    #[tokio::test]
    async fn test_recommendations_are_limited() {
        let source = ProviderRecommendations::new(Arc::new(provider()));
        let movies = source.for_movie(&Movie::new(1, "Alien")).await.found().unwrap();

        assert_eq!(movies.len(), 5);
        assert_eq!(movies[0].title, "Rec 10");
    }

    #[tokio::test]
    async fn test_empty_and_failed_are_distinct() {
        let source = ProviderRecommendations::new(Arc::new(provider()));

        assert!(source.for_movie(&Movie::new(2, "Obscure")).await.is_empty());
        assert!(source.for_movie(&Movie::new(3, "Broken")).await.is_failed());
    }
}
