//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ExcludeMovieFilter::new(movie.id))
///     .add_filter(MetadataFilter::new(MetadataRequirement::GenresAndRating))
///     .add_filter(DuplicateTitleFilter);
///
/// let kept = pipeline.apply(movies)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence, logging counts around each one.
    pub fn apply(&self, movies: Vec<Movie>) -> Result<Vec<Movie>> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{ExcludeMovieFilter, GenreFilter};

    fn movies() -> Vec<Movie> {
        vec![
            Movie::new(1, "Halloween").with_genres(["Horror"]),
            Movie::new(2, "Airplane!").with_genres(["Comedy"]),
            Movie::new(3, "Scream").with_genres(["Horror", "Mystery"]),
        ]
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        assert!(pipeline.is_empty());

        let filtered = pipeline.apply(movies()).unwrap();
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_filters_run_in_order() {
        let pipeline = FilterPipeline::new()
            .add_filter(GenreFilter::new("horror"))
            .add_filter(ExcludeMovieFilter::new(1));
        assert_eq!(pipeline.len(), 2);

        let filtered = pipeline.apply(movies()).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Scream");
    }
}
