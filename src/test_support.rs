//! Fake upstreams and request helpers for route tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use wiremock::MockServer;

use crate::config::env::EnvKey;
use crate::config::settings::AppConfig;
use crate::state::AppState;

pub struct Upstreams {
    pub tmdb: MockServer,
    pub omdb: MockServer,
    pub openai: MockServer,
}

impl Upstreams {
    pub async fn start() -> Self {
        Self {
            tmdb: MockServer::start().await,
            omdb: MockServer::start().await,
            openai: MockServer::start().await,
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config_without(None)
    }

    /// Same as [`Upstreams::config`] with `missing` left unset.
    pub fn config_without(&self, missing: Option<EnvKey>) -> AppConfig {
        let tmdb = format!("{}/3", self.tmdb.uri());
        let omdb = self.omdb.uri();
        let openai = format!("{}/v1", self.openai.uri());

        AppConfig::from_lookup(|key| {
            if Some(key) == missing {
                return None;
            }
            let value: &str = match key {
                EnvKey::TmdbApiKey => "tmdb-key",
                EnvKey::OmdbApiKey => "omdb-key",
                EnvKey::OpenAiApiKey => "openai-key",
                EnvKey::OpenAiModel => "test-model",
                EnvKey::TmdbBaseUrl => &tmdb,
                EnvKey::OmdbBaseUrl => &omdb,
                EnvKey::OpenAiBaseUrl => &openai,
                EnvKey::ServerPort => return None,
            };
            Some(value.to_string())
        })
        .expect("test config")
    }

    pub fn app(&self) -> Router {
        self.app_with(self.config())
    }

    pub fn app_with(&self, config: AppConfig) -> Router {
        let state = AppState::from_config(&config).expect("http client");
        crate::app::create_app(state)
    }
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}
