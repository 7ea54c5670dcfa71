//! TMDB JSON payloads and their conversion into catalog types.
//!
//! API Documentation: https://developer.themoviedb.org/reference/intro/getting-started

use std::collections::HashMap;

use catalog::{Company, Movie, MovieRecord, parse_release_year, rating_from_votes};
use serde::Deserialize;
use tracing::debug;

/// Genre id to display name, as published by `/genre/movie/list`
pub type GenreTable = HashMap<u64, String>;

/// One page of `/search/movie`, `/discover/movie` or an appended
/// `recommendations` block
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<MovieSummary>,
    #[serde(default)]
    pub total_pages: u32,
}

#[derive(Debug, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    pub release_date: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u64>,
}

/// `/movie/{id}?append_to_response=recommendations`
#[derive(Debug, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    pub release_date: Option<String>,
    #[serde(default)]
    pub genres: Vec<GenreEntry>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u64>,
    #[serde(default)]
    pub production_companies: Vec<CompanyEntry>,
    pub recommendations: Option<SearchPage>,
}

#[derive(Debug, Deserialize)]
pub struct GenreEntry {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CompanyEntry {
    pub id: u64,
    pub name: String,
}

/// `/genre/movie/list`
#[derive(Debug, Deserialize)]
pub struct GenreList {
    pub genres: Vec<GenreEntry>,
}

/// Error body TMDB sends alongside 4xx/5xx statuses
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub status_message: String,
}

fn release_year(title: &str, date: Option<&str>) -> Option<u16> {
    match parse_release_year(date.unwrap_or_default()) {
        Ok(year) => year,
        Err(e) => {
            debug!("Ignoring release date of '{}': {}", title, e);
            None
        }
    }
}

impl MovieSummary {
    /// Summaries only carry genre ids; names come from the genre table.
    /// Unknown ids are dropped.
    pub fn into_movie(self, genre_table: &GenreTable) -> Movie {
        let genres = self
            .genre_ids
            .iter()
            .filter_map(|id| genre_table.get(id).cloned())
            .collect();

        Movie {
            year: release_year(&self.title, self.release_date.as_deref()),
            rating: rating_from_votes(self.vote_average, self.vote_count),
            id: self.id,
            title: self.title,
            genres,
            companies: Vec::new(),
        }
    }
}

impl MovieDetails {
    pub fn into_record(self, genre_table: &GenreTable) -> MovieRecord {
        let recommendations = self
            .recommendations
            .map(|page| {
                page.results
                    .into_iter()
                    .map(|summary| summary.into_movie(genre_table))
                    .collect()
            })
            .unwrap_or_default();

        let movie = Movie {
            year: release_year(&self.title, self.release_date.as_deref()),
            rating: rating_from_votes(self.vote_average, self.vote_count),
            id: self.id,
            title: self.title,
            genres: self.genres.into_iter().map(|g| g.name).collect(),
            companies: self
                .production_companies
                .into_iter()
                .map(|c| Company::new(c.id, c.name))
                .collect(),
        };

        MovieRecord::new(movie).with_recommendations(recommendations)
    }
}
