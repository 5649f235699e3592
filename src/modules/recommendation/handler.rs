use super::dto::{RecommendationParams, RecommendationRequest};
use super::service::RecommendationService;
use super::view::RecommendationsTemplate;
use crate::common::response::{HtmlPage, PageError};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

/// Generated movie recommendations
#[utoipa::path(
    get,
    path = "/recommendations",
    params(RecommendationParams),
    responses(
        (status = 200, description = "Recommendation text", content_type = "text/html", body = String),
        (status = 500, description = "Generation failed or returned nothing", content_type = "text/html", body = String)
    ),
    tag = "Recommendations"
)]
pub async fn recommendations(
    State(state): State<AppState>,
    Query(params): Query<RecommendationParams>,
) -> impl IntoResponse {
    let req = RecommendationRequest::from_params(params);
    match RecommendationService::recommend(&state, req).await {
        Ok(result) => HtmlPage(RecommendationsTemplate { result }, StatusCode::OK).into_response(),
        Err(e) => PageError::from(e).into_response(),
    }
}
