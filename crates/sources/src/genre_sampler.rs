//! Genre Sampler - random films for a genre
//!
//! ## Algorithm
//! 1. Free-text search with the genre as the query, over-fetching candidates
//! 2. Look up each candidate's full record to learn its real genre tags
//! 3. Keep candidates tagged with the requested genre
//! 4. Randomly pick up to `sample_size` of the survivors
//!
//! Candidate lookups are best effort: a failed lookup drops that candidate
//! and sampling carries on. Only a failed search fails the whole sample.

use std::sync::Arc;

use anyhow::{Context, Result};
use catalog::Movie;
use pipeline::FilterPipeline;
use pipeline::filters::GenreFilter;
use provider::MetadataProvider;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, instrument};

pub const DEFAULT_CANDIDATE_LIMIT: usize = 50;
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Samples random movies belonging to a genre
pub struct GenreSampler<P> {
    /// Shared handle to the metadata provider
    provider: Arc<P>,

    /// How many search hits to inspect
    candidate_limit: usize,

    /// How many movies to return at most
    sample_size: usize,
}

impl<P> Clone for GenreSampler<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            candidate_limit: self.candidate_limit,
            sample_size: self.sample_size,
        }
    }
}

impl<P: MetadataProvider> GenreSampler<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }

    /// Configure how many search hits are inspected (default: 50)
    pub fn with_candidate_limit(mut self, limit: usize) -> Self {
        self.candidate_limit = limit;
        self
    }

    /// Configure the maximum sample size (default: 10)
    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = size;
        self
    }

    /// Random sample using the thread-local generator
    pub async fn sample(&self, genre: &str) -> Result<Vec<Movie>> {
        self.sample_with_rng(genre, &mut rand::rng()).await
    }

    /// Random sample drawn with the given generator
    pub async fn sample_with_rng<R: Rng + ?Sized>(&self, genre: &str, rng: &mut R) -> Result<Vec<Movie>> {
        let matching = self.matching(genre).await?;
        Ok(self.choose(matching, rng))
    }

    /// Every inspected candidate that really carries `genre`, enriched with
    /// its genres, rating and companies, in search order
    #[instrument(skip(self))]
    pub async fn matching(&self, genre: &str) -> Result<Vec<Movie>> {
        let candidates = self
            .provider
            .search_movies(genre, self.candidate_limit)
            .await
            .with_context(|| format!("Searching for '{}' movies", genre))?;

        let inspected = candidates.len();
        let mut enriched = Vec::with_capacity(inspected);
        let mut skipped = 0usize;

        for mut candidate in candidates {
            match self.provider.fetch_movie(candidate.id).await {
                Ok(record) => {
                    candidate.enrich_from(&record.movie);
                    enriched.push(candidate);
                }
                Err(e) => {
                    debug!("Skipping '{}' ({}): {}", candidate.title, candidate.id, e);
                    skipped += 1;
                }
            }
        }

        let matching = FilterPipeline::new()
            .add_filter(GenreFilter::new(genre))
            .apply(enriched)?;

        info!(
            "Genre '{}': {} candidates, {} lookups skipped, {} matching",
            genre,
            inspected,
            skipped,
            matching.len()
        );
        Ok(matching)
    }

    fn choose<R: Rng + ?Sized>(&self, mut movies: Vec<Movie>, rng: &mut R) -> Vec<Movie> {
        movies.shuffle(rng);
        movies.truncate(self.sample_size);
        movies
    }
}
