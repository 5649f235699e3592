use axum::http::StatusCode;
use thiserror::Error;

use crate::infrastructure::error::UpstreamError;

/// Outcome of a failed request, decided at the handler boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("upstream unavailable: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("recommendation unavailable: {0}")]
    Recommendation(#[source] UpstreamError),

    #[error("{0} not found")]
    NotFound(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Upstream(_) | AppError::Recommendation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// What the visitor sees. Never includes upstream detail.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::Upstream(_) => "Movie data is unavailable right now. Please try again later.",
            AppError::Recommendation(_) => {
                "Recommendations are unavailable right now. Please try again later."
            }
            AppError::NotFound(_) => "We couldn't find that movie.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::NotFound("movie 1".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn upstream_failures_map_to_500_without_detail() {
        let err = AppError::from(UpstreamError::MissingApiKey { service: "tmdb" });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.public_message().contains("tmdb"));

        let err = AppError::Recommendation(UpstreamError::EmptyCompletion { service: "openai" });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
