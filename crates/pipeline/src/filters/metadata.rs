//! Filter to drop movies the provider knows too little about.
//!
//! Recommendation lists coming back from the provider often contain bare
//! entries; showing them gives the user nothing to go on.

use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;

/// What a movie must carry to pass a [`MetadataFilter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataRequirement {
    /// Genre tags, a rating, or both
    GenresOrRating,
    /// Genre tags and a rating
    GenresAndRating,
    /// Genre tags, rating optional
    Genres,
}

pub struct MetadataFilter {
    requirement: MetadataRequirement,
}

impl MetadataFilter {
    pub fn new(requirement: MetadataRequirement) -> Self {
        Self { requirement }
    }

    fn keeps(&self, movie: &Movie) -> bool {
        match self.requirement {
            MetadataRequirement::GenresOrRating => movie.has_genres() || movie.has_rating(),
            MetadataRequirement::GenresAndRating => movie.has_genres() && movie.has_rating(),
            MetadataRequirement::Genres => movie.has_genres(),
        }
    }
}

impl Filter for MetadataFilter {
    fn name(&self) -> &str {
        "MetadataFilter"
    }

    fn apply(&self, movies: Vec<Movie>) -> Result<Vec<Movie>> {
        Ok(movies.into_iter().filter(|m| self.keeps(m)).collect())
    }
}
