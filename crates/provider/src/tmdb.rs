//! TMDB metadata provider client.

use catalog::{Company, Movie, MovieId, MovieRecord};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use crate::config::ProviderConfig;
use crate::error::{ProviderError, Result};
use crate::wire::{ErrorBody, GenreList, GenreTable, MovieDetails, SearchPage};
use crate::MetadataProvider;

const USER_AGENT: &str = concat!("movie-recs/", env!("CARGO_PKG_VERSION"));

/// TMDB API client.
///
/// Holds one `reqwest::Client` for the whole run plus the genre table used
/// to name the genre ids that search results carry.
pub struct TmdbClient {
    client: Client,
    config: ProviderConfig,
    genre_table: GenreTable,
}

impl TmdbClient {
    /// Build a client without touching the network.
    ///
    /// Search results will carry no genre names until
    /// [`TmdbClient::load_genres`] has run.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderError::MissingApiKey);
        }

        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            config,
            genre_table: GenreTable::new(),
        })
    }

    /// Build a client and load the genre table.
    ///
    /// A failed genre table load is not fatal: detail lookups still carry
    /// genre names, only search summaries go without.
    pub async fn connect(config: ProviderConfig) -> Result<Self> {
        info!("Connecting to metadata provider at {}", config.base_url);
        let mut client = Self::new(config)?;

        match client.load_genres().await {
            Ok(count) => debug!("Loaded {} genre names", count),
            Err(e) => warn!("Could not load genre names, search results will lack genres: {}", e),
        }

        Ok(client)
    }

    /// Fetch `/genre/movie/list` and remember the id -> name mapping
    pub async fn load_genres(&mut self) -> Result<usize> {
        let list: GenreList = self.send_json(self.get("/genre/movie/list")).await?;
        self.genre_table = list.genres.into_iter().map(|g| (g.id, g.name)).collect();
        Ok(self.genre_table.len())
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// GET request against the configured base URL with auth and language set
    fn get(&self, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        let request = self
            .client
            .get(url)
            .query(&[("language", self.config.language.as_str())]);

        if self.config.uses_bearer_token() {
            request.bearer_auth(&self.config.api_key)
        } else {
            request.query(&[("api_key", self.config.api_key.as_str())])
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.status_message)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown error").to_string());
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }

    /// Walk result pages until `limit` movies are collected or pages run out
    async fn collect_pages(&self, path: &str, params: &[(&str, &str)], limit: usize) -> Result<Vec<Movie>> {
        let mut movies = Vec::new();
        let mut page: u32 = 1;

        while movies.len() < limit {
            let page_param = page.to_string();
            let result: SearchPage = self
                .send_json(self.get(path).query(params).query(&[("page", page_param.as_str())]))
                .await?;

            debug!(
                "{} page {}/{}: {} results",
                path,
                result.page,
                result.total_pages,
                result.results.len()
            );

            let exhausted = result.results.is_empty() || page >= result.total_pages;
            movies.extend(
                result
                    .results
                    .into_iter()
                    .map(|summary| summary.into_movie(&self.genre_table)),
            );

            if exhausted {
                break;
            }
            page += 1;
        }

        movies.truncate(limit);
        Ok(movies)
    }
}

impl MetadataProvider for TmdbClient {
    #[instrument(skip(self))]
    async fn search_movies(&self, query: &str, limit: usize) -> Result<Vec<Movie>> {
        self.collect_pages(
            "/search/movie",
            &[("query", query), ("include_adult", "false")],
            limit,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn fetch_movie(&self, id: MovieId) -> Result<MovieRecord> {
        let request = self
            .get(&format!("/movie/{}", id))
            .query(&[("append_to_response", "recommendations")]);

        match self.send_json::<MovieDetails>(request).await {
            Ok(details) => Ok(details.into_record(&self.genre_table)),
            Err(ProviderError::Status { status: 404, .. }) => Err(ProviderError::NotFound(id)),
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self, company), fields(company = %company.name))]
    async fn movies_by_company(&self, company: &Company, limit: usize) -> Result<Vec<Movie>> {
        let company_id = company.id.to_string();
        self.collect_pages(
            "/discover/movie",
            &[
                ("with_companies", company_id.as_str()),
                ("sort_by", "popularity.desc"),
                ("include_adult", "false"),
            ],
            limit,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_is_rejected() {
        let result = TmdbClient::new(ProviderConfig::new("  "));
        assert!(matches!(result, Err(ProviderError::MissingApiKey)));
    }

    #[test]
    fn test_new_keeps_base_url() {
        let client = TmdbClient::new(ProviderConfig::new("key").with_base_url("http://localhost:1")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:1");
    }
}
