//! Core traits for the filtering pipeline.
//!
//! A `Filter` narrows a movie list; a `FilterPipeline` runs several in a row.

use anyhow::Result;
use catalog::Movie;

/// One step of a movie list pipeline.
///
/// Filters own the list they are given and hand back the movies they keep,
/// in their original relative order.
pub trait Filter: Send + Sync {
    /// Short name used in pipeline logs
    fn name(&self) -> &str;

    fn apply(&self, movies: Vec<Movie>) -> Result<Vec<Movie>>;
}
