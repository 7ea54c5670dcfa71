//! Fallback chain for the global title search.
//!
//! ## Strategies, in order
//! 1. Provider-native recommendations carrying genres or a rating
//! 2. Related titles: a search on the movie's own title, to catch sequels
//!    and prequels. Only tried when the provider had no recommendations at
//!    all; unusable recommendations go straight to the genre strategy.
//! 3. Same genre: a genre sample on the movie's first genre, best rated first
//!
//! The first strategy that yields anything wins; results are never mixed.
//! A failing strategy is logged and the chain moves on. Related and
//! same-genre results are deduplicated by title.

use std::sync::Arc;

use anyhow::{Context, Result};
use catalog::{Movie, MovieRecord};
use pipeline::filters::{
    DuplicateTitleFilter, ExcludeMovieFilter, MetadataFilter, MetadataRequirement, RelatedTitleFilter,
};
use pipeline::{FilterPipeline, sort_by_rating_desc};
use provider::MetadataProvider;
use tracing::{debug, instrument, warn};

use crate::genre_sampler::GenreSampler;
use crate::outcome::Outcome;

pub const DEFAULT_LIMIT: usize = 5;

/// How many title search hits are inspected for related titles
const RELATED_SEARCH_LIMIT: usize = 20;

/// Which strategy produced a set of suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    ProviderNative,
    RelatedTitles,
    SameGenre,
}

/// Suggestions and the strategy that found them
#[derive(Debug, Clone)]
pub struct Suggestions {
    pub strategy: Strategy,
    pub movies: Vec<Movie>,
}

pub struct FallbackChain<P> {
    provider: Arc<P>,
    sampler: GenreSampler<P>,
    limit: usize,
}

impl<P: MetadataProvider> FallbackChain<P> {
    pub fn new(provider: Arc<P>) -> Self {
        let sampler = GenreSampler::new(provider.clone());
        Self {
            provider,
            sampler,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Use a differently configured sampler for the same-genre strategy
    pub fn with_sampler(mut self, sampler: GenreSampler<P>) -> Self {
        self.sampler = sampler;
        self
    }

    #[instrument(skip(self, record), fields(movie_id = record.movie.id))]
    pub async fn suggest(&self, record: &MovieRecord) -> Outcome<Suggestions> {
        let mut last_error: Option<anyhow::Error> = None;

        let attempts = [
            Strategy::ProviderNative,
            Strategy::RelatedTitles,
            Strategy::SameGenre,
        ];

        for strategy in attempts {
            if strategy == Strategy::RelatedTitles && !record.recommendations.is_empty() {
                debug!(
                    "Skipping related titles, {} native recommendations were unusable",
                    record.recommendations.len()
                );
                continue;
            }

            let result = match strategy {
                Strategy::ProviderNative => self.provider_native(record),
                Strategy::RelatedTitles => self.related_titles(&record.movie).await,
                Strategy::SameGenre => self.same_genre(&record.movie).await,
            };

            match result {
                Ok(movies) if !movies.is_empty() => {
                    debug!("{:?} produced {} suggestions", strategy, movies.len());
                    return Outcome::Found(Suggestions { strategy, movies });
                }
                Ok(_) => debug!("{:?} produced nothing", strategy),
                Err(e) => {
                    warn!("{:?} failed: {:#}", strategy, e);
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) => Outcome::Failed(e),
            None => Outcome::Empty,
        }
    }

    fn provider_native(&self, record: &MovieRecord) -> Result<Vec<Movie>> {
        let mut movies = FilterPipeline::new()
            .add_filter(MetadataFilter::new(MetadataRequirement::GenresOrRating))
            .apply(record.recommendations.clone())?;
        movies.truncate(self.limit);
        Ok(movies)
    }

    async fn related_titles(&self, movie: &Movie) -> Result<Vec<Movie>> {
        let hits = self
            .provider
            .search_movies(&movie.title, RELATED_SEARCH_LIMIT)
            .await
            .with_context(|| format!("Searching for titles related to '{}'", movie.title))?;

        let mut related = FilterPipeline::new()
            .add_filter(RelatedTitleFilter::new(movie))
            .add_filter(DuplicateTitleFilter)
            .apply(hits)?;
        related.truncate(self.limit);
        Ok(related)
    }

    async fn same_genre(&self, movie: &Movie) -> Result<Vec<Movie>> {
        let Some(genre) = movie.primary_genre() else {
            return Ok(Vec::new());
        };

        let sample = self.sampler.sample(genre).await?;
        let mut movies = FilterPipeline::new()
            .add_filter(ExcludeMovieFilter::new(movie.id))
            .add_filter(MetadataFilter::new(MetadataRequirement::Genres))
            .add_filter(DuplicateTitleFilter)
            .apply(sample)?;
        sort_by_rating_desc(&mut movies);
        movies.truncate(self.limit);
        Ok(movies)
    }
}
