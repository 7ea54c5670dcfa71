//! Filter to keep only movies tagged with a requested genre.

use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;

/// Keeps movies whose genre tags contain the requested genre.
///
/// Matching is case-insensitive and resolves the aliases known to
/// `catalog::genre` ("Sci-Fi" matches "Science Fiction").
pub struct GenreFilter {
    genre: String,
}

impl GenreFilter {
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(&self, movies: Vec<Movie>) -> Result<Vec<Movie>> {
        Ok(movies
            .into_iter()
            .filter(|movie| movie.has_genre(&self.genre))
            .collect())
    }
}
