use crate::config::settings::AppConfig;
use crate::infrastructure::http;
use crate::infrastructure::omdb::client::OmdbClient;
use crate::infrastructure::openai::client::OpenAiClient;
use crate::infrastructure::tmdb::client::TmdbClient;

/// Per-process handles. Requests share nothing mutable; the clients only hold
/// configuration and a cloneable `reqwest::Client`.
#[derive(Clone)]
pub struct AppState {
    pub tmdb: TmdbClient,
    pub omdb: OmdbClient,
    pub openai: OpenAiClient,
}

impl AppState {
    pub fn new(tmdb: TmdbClient, omdb: OmdbClient, openai: OpenAiClient) -> Self {
        Self {
            tmdb,
            omdb,
            openai,
        }
    }

    pub fn from_config(config: &AppConfig) -> reqwest::Result<Self> {
        let client = http::build_client()?;

        let tmdb = TmdbClient::new(client.clone(), config.tmdb.clone());
        let omdb = OmdbClient::new(client.clone(), config.omdb.clone());
        let openai = OpenAiClient::new(client, config.openai.clone(), config.openai_model.clone());

        Ok(Self::new(tmdb, omdb, openai))
    }
}
