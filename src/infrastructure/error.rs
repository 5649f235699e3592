use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to one of the upstream providers.
///
/// Callers never branch on the variant; it only feeds the server log.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{service} API key is not configured")]
    MissingApiKey { service: &'static str },

    #[error("{service} base URL cannot take path segments")]
    Endpoint { service: &'static str },

    #[error("{service} request failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} responded with {status}")]
    Status {
        service: &'static str,
        status: StatusCode,
    },

    #[error("{service} returned an unexpected payload: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{service} returned no usable completion")]
    EmptyCompletion { service: &'static str },
}

impl UpstreamError {
    pub fn service(&self) -> &'static str {
        match self {
            UpstreamError::MissingApiKey { service }
            | UpstreamError::Endpoint { service }
            | UpstreamError::Transport { service, .. }
            | UpstreamError::Status { service, .. }
            | UpstreamError::Decode { service, .. }
            | UpstreamError::EmptyCompletion { service } => service,
        }
    }
}
