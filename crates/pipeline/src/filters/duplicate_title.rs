//! Filter form of the title deduplicator.

use crate::dedup::dedup_by_title;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;

/// Drops movies whose exact title was already seen earlier in the list
pub struct DuplicateTitleFilter;

impl Filter for DuplicateTitleFilter {
    fn name(&self) -> &str {
        "DuplicateTitleFilter"
    }

    fn apply(&self, movies: Vec<Movie>) -> Result<Vec<Movie>> {
        Ok(dedup_by_title(movies))
    }
}
