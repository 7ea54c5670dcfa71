//! Metadata provider client.
//!
//! This crate is the only place that talks to the outside world. It provides:
//! - The `MetadataProvider` trait: search by text, fetch by id, list a
//!   production company's movies
//! - `TmdbClient`, the HTTP implementation against The Movie Database v3 API
//! - `StaticProvider`, an in-memory implementation for offline runs and tests
//!
//! Everything returns catalog types (`Movie`, `MovieRecord`), so callers never
//! see wire formats.

pub mod config;
pub mod error;
pub mod memory;
pub mod tmdb;
mod wire;

use catalog::{Company, Movie, MovieId, MovieRecord};

pub use config::{ProviderConfig, DEFAULT_BASE_URL, DEFAULT_LANGUAGE};
pub use error::{ProviderError, Result};
pub use memory::StaticProvider;
pub use tmdb::TmdbClient;

/// A source of movie metadata.
///
/// All calls are plain request/response lookups; implementations keep no
/// per-query state.
#[allow(async_fn_in_trait)]
pub trait MetadataProvider {
    /// Free-text search over titles, returning at most `limit` summaries in
    /// provider relevance order
    async fn search_movies(&self, query: &str, limit: usize) -> Result<Vec<Movie>>;

    /// Full record for one movie, including provider-native recommendations
    async fn fetch_movie(&self, id: MovieId) -> Result<MovieRecord>;

    /// Movies produced by `company`, at most `limit`
    async fn movies_by_company(&self, company: &Company, limit: usize) -> Result<Vec<Movie>>;
}
