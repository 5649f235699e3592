//! TMDB (The Movie Database) v3 client: search, popular list and
//! details-by-id.

use serde::de::DeserializeOwned;
use tracing::debug;

use super::models::{TmdbMovie, TmdbMovieDetails, TmdbPage};
use crate::config::settings::ProviderConfig;
use crate::infrastructure::error::UpstreamError;
use crate::infrastructure::http::{endpoint, read_json, require_key, transport};

const SERVICE: &str = "tmdb";

#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl TmdbClient {
    pub fn new(http: reqwest::Client, config: ProviderConfig) -> Self {
        Self { http, config }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&str, &str)],
    ) -> Result<T, UpstreamError> {
        let api_key = require_key(SERVICE, &self.config.api_key)?;
        let url = endpoint(SERVICE, &self.config.base_url, segments)?;

        debug!(service = SERVICE, path = url.path(), "Calling upstream");

        let response = self
            .http
            .get(url)
            .query(&[("api_key", api_key)])
            .query(params)
            .send()
            .await
            .map_err(transport(SERVICE))?;

        read_json(SERVICE, response).await
    }

    /// Callers short-circuit empty queries; this always issues the request.
    pub async fn search_movies(&self, query: &str) -> Result<Vec<TmdbMovie>, UpstreamError> {
        let page: TmdbPage<TmdbMovie> = self
            .get(&["search", "movie"], &[("query", query)])
            .await?;
        Ok(page.results)
    }

    pub async fn popular_movies(&self) -> Result<Vec<TmdbMovie>, UpstreamError> {
        let page: TmdbPage<TmdbMovie> = self.get(&["movie", "popular"], &[]).await?;
        Ok(page.results)
    }

    pub async fn movie(&self, id: &str) -> Result<TmdbMovieDetails, UpstreamError> {
        self.get(&["movie", id], &[]).await
    }
}
