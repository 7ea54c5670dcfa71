//! Filter to remove one specific movie (usually the one being recommended
//! from).

use crate::traits::Filter;
use anyhow::Result;
use catalog::{Movie, MovieId};

pub struct ExcludeMovieFilter {
    id: MovieId,
}

impl ExcludeMovieFilter {
    pub fn new(id: MovieId) -> Self {
        Self { id }
    }
}

impl Filter for ExcludeMovieFilter {
    fn name(&self) -> &str {
        "ExcludeMovieFilter"
    }

    fn apply(&self, movies: Vec<Movie>) -> Result<Vec<Movie>> {
        Ok(movies.into_iter().filter(|m| m.id != self.id).collect())
    }
}
