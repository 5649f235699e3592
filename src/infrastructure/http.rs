//! Plumbing shared by the upstream clients: one `reqwest::Client` for the
//! whole process, endpoint building, and response decoding.

use serde::de::DeserializeOwned;
use tracing::trace;
use url::Url;

use super::error::UpstreamError;

pub fn build_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Appends `segments` to `base`, percent-encoding each one.
pub(crate) fn endpoint(
    service: &'static str,
    base: &Url,
    segments: &[&str],
) -> Result<Url, UpstreamError> {
    let mut url = base.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| UpstreamError::Endpoint { service })?;
        path.pop_if_empty().extend(segments);
    }
    Ok(url)
}

/// Wraps a `reqwest` failure. The URL is dropped because TMDB and OMDb carry
/// the API key in the query string.
pub(crate) fn transport(service: &'static str) -> impl FnOnce(reqwest::Error) -> UpstreamError {
    move |source| UpstreamError::Transport {
        service,
        source: source.without_url(),
    }
}

pub(crate) fn require_key<'a>(
    service: &'static str,
    key: &'a Option<String>,
) -> Result<&'a str, UpstreamError> {
    key.as_deref()
        .ok_or(UpstreamError::MissingApiKey { service })
}

/// Checks the status, then decodes the body. The raw body goes to the trace
/// log before parsing so malformed payloads can be inspected.
pub(crate) async fn read_json<T: DeserializeOwned>(
    service: &'static str,
    response: reqwest::Response,
) -> Result<T, UpstreamError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(transport(service))?;

    trace!(service, %status, body = %body, "Upstream response");

    if !status.is_success() {
        return Err(UpstreamError::Status { service, status });
    }

    serde_json::from_str(&body).map_err(|source| UpstreamError::Decode { service, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_keeps_base_path() {
        let base = Url::parse("https://api.themoviedb.org/3").unwrap();
        let url = endpoint("tmdb", &base, &["movie", "popular"]).unwrap();
        assert_eq!(url.as_str(), "https://api.themoviedb.org/3/movie/popular");
    }

    #[test]
    fn endpoint_handles_trailing_slash() {
        let base = Url::parse("https://api.openai.com/v1/").unwrap();
        let url = endpoint("openai", &base, &["chat", "completions"]).unwrap();
        assert_eq!(url.as_str(), "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn endpoint_encodes_segments() {
        let base = Url::parse("http://localhost:8080").unwrap();
        let url = endpoint("tmdb", &base, &["movie", "12/../x?y"]).unwrap();
        assert_eq!(url.path(), "/movie/12%2F..%2Fx%3Fy");
        assert!(url.query().is_none());
    }

    #[test]
    fn missing_key_is_reported() {
        let err = require_key("omdb", &None).unwrap_err();
        assert!(matches!(err, UpstreamError::MissingApiKey { service: "omdb" }));
        assert_eq!(require_key("omdb", &Some("k".into())).unwrap(), "k");
    }
}
