//! Core domain types for movies fetched from the metadata provider.
//!
//! Movies are transient: they are fetched fresh per query, shown, ranked and
//! dropped. Nothing here is persisted.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::genre;

// =============================================================================
// Type Aliases
// =============================================================================

/// Provider-assigned identifier for a movie
pub type MovieId = u64;

/// Provider-assigned identifier for a production company
pub type CompanyId = u64;

// =============================================================================
// Movie-related Types
// =============================================================================

/// A production company credited on a movie
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
}

impl Company {
    pub fn new(id: CompanyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A movie as returned by the metadata provider.
///
/// Search results usually arrive partially filled (no companies, sometimes no
/// genres); a detail lookup fills in the rest via [`Movie::enrich_from`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Release year, `None` when the provider has no release date
    pub year: Option<u16>,
    /// Genre labels in provider order (e.g. "Action", "Science Fiction")
    pub genres: Vec<String>,
    /// Average vote on a 0-10 scale, `None` when nobody has voted
    pub rating: Option<f32>,
    pub companies: Vec<Company>,
}

impl Movie {
    /// Creates a movie with only an id and a title
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            year: None,
            genres: Vec::new(),
            rating: None,
            companies: Vec::new(),
        }
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_companies(mut self, companies: Vec<Company>) -> Self {
        self.companies = companies;
        self
    }

    pub fn has_genres(&self) -> bool {
        !self.genres.is_empty()
    }

    pub fn has_rating(&self) -> bool {
        self.rating.is_some()
    }

    /// True if any of this movie's genre tags matches `wanted` after
    /// normalization (case, surrounding whitespace, known aliases)
    pub fn has_genre(&self, wanted: &str) -> bool {
        self.genres.iter().any(|g| genre::same_genre(g, wanted))
    }

    /// First listed genre, used as the seed for genre-based fallbacks
    pub fn primary_genre(&self) -> Option<&str> {
        self.genres.first().map(String::as_str)
    }

    /// Attach the derived fields (genres, rating, companies) from a full
    /// record of the same movie. Title and id are left untouched.
    pub fn enrich_from(&mut self, full: &Movie) {
        self.genres = full.genres.clone();
        self.rating = full.rating;
        self.companies = full.companies.clone();
        if self.year.is_none() {
            self.year = full.year;
        }
    }
}

/// The provider's full record for a movie: the movie itself plus the
/// provider-native recommendation list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub movie: Movie,
    pub recommendations: Vec<Movie>,
}

impl MovieRecord {
    pub fn new(movie: Movie) -> Self {
        Self {
            movie,
            recommendations: Vec::new(),
        }
    }

    pub fn with_recommendations(mut self, recommendations: Vec<Movie>) -> Self {
        self.recommendations = recommendations;
        self
    }
}

// =============================================================================
// Parsing helpers
// =============================================================================

/// Extract the year from a provider release date such as "2010-07-15".
///
/// Returns `Ok(None)` for an empty date, which the provider uses for
/// unreleased or undated titles.
pub fn parse_release_year(date: &str) -> Result<Option<u16>> {
    let date = date.trim();
    if date.is_empty() {
        return Ok(None);
    }

    let invalid = || CatalogError::InvalidValue {
        field: "release_date".to_string(),
        value: date.to_string(),
    };

    let year = date.get(..4).ok_or_else(invalid)?;
    year.parse::<u16>().map(Some).map_err(|_| invalid())
}

/// Convert a provider vote average into a rating; zero votes means unrated
pub fn rating_from_votes(vote_average: Option<f64>, vote_count: Option<u64>) -> Option<f32> {
    match (vote_average, vote_count) {
        (_, Some(0)) => None,
        (Some(avg), _) => Some(avg as f32),
        (None, _) => None,
    }
}
