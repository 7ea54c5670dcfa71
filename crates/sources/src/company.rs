//! Production company suggestions.
//!
//! Shown next to whatever the fallback chain produced, never instead of it.

use std::sync::Arc;

use anyhow::Context;
use catalog::Movie;
use pipeline::filters::{ExcludeMovieFilter, MetadataFilter, MetadataRequirement};
use pipeline::{FilterPipeline, dedup_by_title};
use provider::MetadataProvider;
use tracing::{debug, instrument, warn};

use crate::outcome::Outcome;

pub const DEFAULT_LIMIT: usize = 5;
pub const DEFAULT_PER_COMPANY: usize = 5;

/// How many movies are requested per company before filtering
const COMPANY_FETCH_LIMIT: usize = 20;

/// Suggests well-documented movies from the same production companies
pub struct CompanySuggestions<P> {
    provider: Arc<P>,
    limit: usize,
    per_company: usize,
}

impl<P: MetadataProvider> CompanySuggestions<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            limit: DEFAULT_LIMIT,
            per_company: DEFAULT_PER_COMPANY,
        }
    }

    #[instrument(skip(self, movie), fields(movie_id = movie.id))]
    pub async fn for_movie(&self, movie: &Movie) -> Outcome<Vec<Movie>> {
        if movie.companies.is_empty() {
            debug!("'{}' has no production companies", movie.title);
            return Outcome::Empty;
        }

        let pipeline = FilterPipeline::new()
            .add_filter(ExcludeMovieFilter::new(movie.id))
            .add_filter(MetadataFilter::new(MetadataRequirement::GenresAndRating));

        let mut collected: Vec<Movie> = Vec::new();
        let mut last_error: Option<anyhow::Error> = None;

        for company in &movie.companies {
            let listing = self
                .provider
                .movies_by_company(company, COMPANY_FETCH_LIMIT)
                .await
                .with_context(|| format!("Listing movies of '{}'", company.name));

            let kept = match listing.and_then(|movies| pipeline.apply(movies)) {
                Ok(kept) => kept,
                Err(e) => {
                    warn!("{:#}", e);
                    last_error = Some(e);
                    continue;
                }
            };

            debug!("'{}' contributed {} movies", company.name, kept.len());
            collected.extend(kept.into_iter().take(self.per_company));
        }

        let mut unique = dedup_by_title(collected);
        unique.truncate(self.limit);

        match (unique.is_empty(), last_error) {
            (true, Some(e)) => Outcome::Failed(e),
            _ => Outcome::from_movies(unique),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Company;
    use provider::StaticProvider;

    fn legendary() -> Company {
        Company::new(923, "Legendary Pictures")
    }

    fn syncopy() -> Company {
        Company::new(9996, "Syncopy")
    }

    fn inception() -> Movie {
        Movie::new(1, "Inception")
            .with_genres(["Action"])
            .with_rating(8.4)
            .with_companies(vec![legendary(), syncopy()])
    }

    fn made_by(id: u64, title: &str, companies: Vec<Company>) -> Movie {
        Movie::new(id, title)
            .with_genres(["Drama"])
            .with_rating(7.0)
            .with_companies(companies)
    }

    #[tokio::test]
    async fn test_suggestions_across_companies() {
        let provider = StaticProvider::new()
            .with_movie(inception())
            .with_movie(made_by(2, "Godzilla", vec![legendary()]))
            .with_movie(Movie::new(3, "Unrated").with_genres(["Drama"]).with_companies(vec![legendary()]))
            .with_movie(made_by(4, "Interstellar", vec![legendary(), syncopy()]))
            .with_movie(made_by(5, "Tenet", vec![syncopy()]));
        let source = CompanySuggestions::new(Arc::new(provider));

        let movies = source.for_movie(&inception()).await.found().unwrap();
        let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();

        // Interstellar appears under both companies but is shown once
        assert_eq!(titles, vec!["Godzilla", "Interstellar", "Tenet"]);
    }

    #[tokio::test]
    async fn test_limits() {
        let mut provider = StaticProvider::new().with_movie(inception());
        for i in 10..20 {
            provider = provider.with_movie(made_by(i, &format!("Legendary {}", i), vec![legendary()]));
        }
        for i in 20..30 {
            provider = provider.with_movie(made_by(i, &format!("Syncopy {}", i), vec![syncopy()]));
        }
        let source = CompanySuggestions {
            provider: Arc::new(provider),
            limit: 3,
            per_company: 2,
        };

        let movies = source.for_movie(&inception()).await.found().unwrap();
        let ids: Vec<u64> = movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![10, 11, 20]);
    }

    #[tokio::test]
    async fn test_no_companies_is_empty() {
        let source = CompanySuggestions::new(Arc::new(StaticProvider::new()));
        assert!(source.for_movie(&Movie::new(1, "Indie")).await.is_empty());
    }

    #[tokio::test]
    async fn test_failed_company_is_reported_only_without_results() {
        let provider = StaticProvider::new()
            .with_movie(made_by(5, "Tenet", vec![syncopy()]))
            .failing_company(923);

        let source = CompanySuggestions::new(Arc::new(provider));
        let outcome = source.for_movie(&inception()).await;
        assert_eq!(outcome.found().unwrap()[0].title, "Tenet");

        let source = CompanySuggestions::new(Arc::new(StaticProvider::new().failing_company(923)));
        let only_legendary = inception().with_companies(vec![legendary()]);
        assert!(source.for_movie(&only_legendary).await.is_failed());
    }
}
