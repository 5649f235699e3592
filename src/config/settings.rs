use thiserror::Error;
use url::Url;

use crate::config::env::{self, EnvKey};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_OMDB_BASE_URL: &str = "https://www.omdbapi.com/";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not a valid URL: {source}")]
    InvalidUrl {
        key: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("{key} must be an http(s) URL, got {value}")]
    UnsupportedScheme { key: &'static str, value: String },
}

/// Settings for one upstream provider. An absent key is not a config error;
/// calls that need it fail with `MissingApiKey`.
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: Url,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    pub tmdb: ProviderConfig,
    pub omdb: ProviderConfig,
    pub openai: ProviderConfig,
    pub openai_model: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_lookup(env::get_optional)
    }

    /// Resolves the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(EnvKey) -> Option<String>,
    {
        let value = |key: EnvKey| env::non_blank(lookup(key));

        let provider = |key: EnvKey, url_key: EnvKey, default_url: &str| {
            Ok::<_, ConfigError>(ProviderConfig {
                api_key: value(key),
                base_url: parse_base_url(
                    url_key,
                    &value(url_key).unwrap_or_else(|| default_url.to_string()),
                )?,
            })
        };

        Ok(Self {
            server_port: env::parse_or(value(EnvKey::ServerPort), DEFAULT_PORT),
            tmdb: provider(EnvKey::TmdbApiKey, EnvKey::TmdbBaseUrl, DEFAULT_TMDB_BASE_URL)?,
            omdb: provider(EnvKey::OmdbApiKey, EnvKey::OmdbBaseUrl, DEFAULT_OMDB_BASE_URL)?,
            openai: provider(
                EnvKey::OpenAiApiKey,
                EnvKey::OpenAiBaseUrl,
                DEFAULT_OPENAI_BASE_URL,
            )?,
            openai_model: value(EnvKey::OpenAiModel)
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
        })
    }

    /// Names of the API keys that are not configured.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        [
            (EnvKey::TmdbApiKey, &self.tmdb),
            (EnvKey::OmdbApiKey, &self.omdb),
            (EnvKey::OpenAiApiKey, &self.openai),
        ]
        .into_iter()
        .filter(|(_, provider)| provider.api_key.is_none())
        .map(|(key, _)| key.as_str())
        .collect()
    }
}

fn parse_base_url(key: EnvKey, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
        key: key.as_str(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::UnsupportedScheme {
            key: key.as_str(),
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(EnvKey, &str)]) -> impl Fn(EnvKey) -> Option<String> {
        let map: HashMap<EnvKey, String> = pairs
            .iter()
            .map(|(k, v)| (*k, v.to_string()))
            .collect();
        move |key| map.get(&key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.server_port, DEFAULT_PORT);
        assert_eq!(config.tmdb.base_url.as_str(), "https://api.themoviedb.org/3");
        assert_eq!(config.omdb.base_url.as_str(), DEFAULT_OMDB_BASE_URL);
        assert_eq!(config.openai_model, DEFAULT_OPENAI_MODEL);
        assert_eq!(
            config.missing_keys(),
            vec!["TMDB_API_KEY", "OMDB_API_KEY", "OPENAI_API_KEY"]
        );
    }

    #[test]
    fn blank_keys_count_as_missing() {
        let config = AppConfig::from_lookup(lookup(&[
            (EnvKey::TmdbApiKey, "tmdb-key"),
            (EnvKey::OmdbApiKey, "  "),
            (EnvKey::ServerPort, "8081"),
        ]))
        .unwrap();

        assert_eq!(config.tmdb.api_key.as_deref(), Some("tmdb-key"));
        assert!(config.omdb.api_key.is_none());
        assert_eq!(config.server_port, 8081);
        assert_eq!(config.missing_keys(), vec!["OMDB_API_KEY", "OPENAI_API_KEY"]);
    }

    #[test]
    fn rejects_malformed_base_url() {
        let err = AppConfig::from_lookup(lookup(&[(EnvKey::TmdbBaseUrl, "not a url")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { key: "TMDB_BASE_URL", .. }));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err = AppConfig::from_lookup(lookup(&[(EnvKey::OpenAiBaseUrl, "ftp://example.com")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme { key: "OPENAI_BASE_URL", .. }));
    }
}
