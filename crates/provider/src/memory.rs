//! In-memory metadata provider.
//!
//! Serves a fixed set of records with the same shapes the TMDB client
//! produces: search and company listings return summaries (no companies),
//! `fetch_movie` returns the full record. Individual lookups can be made to
//! fail, and every call is counted, so flows can be exercised offline.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use catalog::{Company, CompanyId, Movie, MovieId, MovieRecord};

use crate::error::{ProviderError, Result};
use crate::MetadataProvider;

#[derive(Debug, Default)]
pub struct StaticProvider {
    /// Records in insertion order; search results follow this order
    records: Vec<MovieRecord>,
    /// Explicit search results keyed by lowercased query
    search_results: HashMap<String, Vec<MovieId>>,
    failing_fetches: HashSet<MovieId>,
    failing_searches: HashSet<String>,
    failing_companies: HashSet<CompanyId>,
    searches: AtomicUsize,
    fetches: AtomicUsize,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movie(mut self, movie: Movie) -> Self {
        self.records.push(MovieRecord::new(movie));
        self
    }

    pub fn with_record(mut self, record: MovieRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Pin the results of one query instead of matching on titles
    pub fn with_search_results(mut self, query: &str, ids: Vec<MovieId>) -> Self {
        self.search_results.insert(query.to_lowercase(), ids);
        self
    }

    pub fn failing_fetch(mut self, id: MovieId) -> Self {
        self.failing_fetches.insert(id);
        self
    }

    pub fn failing_search(mut self, query: &str) -> Self {
        self.failing_searches.insert(query.to_lowercase());
        self
    }

    pub fn failing_company(mut self, id: CompanyId) -> Self {
        self.failing_companies.insert(id);
        self
    }

    pub fn search_count(&self) -> usize {
        self.searches.load(Ordering::Relaxed)
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }

    fn record(&self, id: MovieId) -> Option<&MovieRecord> {
        self.records.iter().find(|r| r.movie.id == id)
    }

    fn summary(record: &MovieRecord) -> Movie {
        Movie {
            companies: Vec::new(),
            ..record.movie.clone()
        }
    }
}

impl MetadataProvider for StaticProvider {
    async fn search_movies(&self, query: &str, limit: usize) -> Result<Vec<Movie>> {
        self.searches.fetch_add(1, Ordering::Relaxed);
        let key = query.trim().to_lowercase();

        if self.failing_searches.contains(&key) {
            return Err(ProviderError::Unavailable(format!("search for '{}'", query)));
        }

        let hits: Vec<Movie> = match self.search_results.get(&key) {
            Some(ids) => ids
                .iter()
                .filter_map(|id| self.record(*id))
                .map(Self::summary)
                .collect(),
            None => self
                .records
                .iter()
                .filter(|r| r.movie.title.to_lowercase().contains(&key))
                .map(Self::summary)
                .collect(),
        };

        Ok(hits.into_iter().take(limit).collect())
    }

    async fn fetch_movie(&self, id: MovieId) -> Result<MovieRecord> {
        self.fetches.fetch_add(1, Ordering::Relaxed);

        if self.failing_fetches.contains(&id) {
            return Err(ProviderError::Unavailable(format!("movie {}", id)));
        }

        self.record(id).cloned().ok_or(ProviderError::NotFound(id))
    }

    async fn movies_by_company(&self, company: &Company, limit: usize) -> Result<Vec<Movie>> {
        if self.failing_companies.contains(&company.id) {
            return Err(ProviderError::Unavailable(format!("company '{}'", company.name)));
        }

        Ok(self
            .records
            .iter()
            .filter(|r| r.movie.companies.iter().any(|c| c.id == company.id))
            .map(Self::summary)
            .take(limit)
            .collect())
    }
}
