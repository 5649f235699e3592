use tracing::debug;

use super::models::{OmdbLookup, OmdbMovie};
use crate::config::settings::ProviderConfig;
use crate::infrastructure::error::UpstreamError;
use crate::infrastructure::http::{read_json, require_key, transport};

const SERVICE: &str = "omdb";

#[derive(Clone)]
pub struct OmdbClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl OmdbClient {
    pub fn new(http: reqwest::Client, config: ProviderConfig) -> Self {
        Self { http, config }
    }

    /// Looks a title up by its IMDb id. A transport or HTTP failure is an
    /// `Err`; the provider saying "no such title" is `Ok(NotFound)`.
    pub async fn by_imdb_id(&self, imdb_id: &str) -> Result<OmdbLookup, UpstreamError> {
        let api_key = require_key(SERVICE, &self.config.api_key)?;

        debug!(service = SERVICE, imdb_id, "Calling upstream");

        let response = self
            .http
            .get(self.config.base_url.clone())
            .query(&[("apikey", api_key), ("i", imdb_id), ("plot", "full")])
            .send()
            .await
            .map_err(transport(SERVICE))?;

        let movie: OmdbMovie = read_json(SERVICE, response).await?;

        if movie.found() {
            Ok(OmdbLookup::Found(movie))
        } else {
            Ok(OmdbLookup::NotFound(movie.error))
        }
    }
}
