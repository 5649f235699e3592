use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{error, info};

use crate::common::error::AppError;

/// A rendered template with its status code.
pub struct HtmlPage<T>(pub T, pub StatusCode);

impl<T> IntoResponse for HtmlPage<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        let (template, status) = (self.0, self.1);
        match template.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => {
                error!(error = %e, "Failed to render template");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    status: u16,
    reason: &'a str,
    message: &'a str,
}

pub struct PageError(pub String, pub StatusCode);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (message, status) = (self.0, self.1);
        let page = ErrorTemplate {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error"),
            message: &message,
        };
        HtmlPage(page, status).into_response()
    }
}

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        let status = err.status_code();
        match &err {
            AppError::Upstream(source) | AppError::Recommendation(source) => {
                error!(service = source.service(), error = %err, "Upstream call failed");
            }
            AppError::NotFound(what) => info!(%what, "Not found"),
        }
        PageError(err.public_message().to_string(), status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::error::UpstreamError;

    #[tokio::test]
    async fn error_page_hides_upstream_detail() {
        let err = AppError::from(UpstreamError::MissingApiKey { service: "tmdb" });
        let response = PageError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("500"));
        assert!(!body.contains("API key"));
    }

    #[test]
    fn not_found_keeps_its_status() {
        let response = PageError::from(AppError::NotFound("movie 9".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
