use super::dto::SearchParams;
use super::service::MovieService;
use super::view::{IndexTemplate, MovieTemplate, SearchTemplate};
use crate::common::response::{HtmlPage, PageError};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

/// Popular movies
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Listing of popular movies", content_type = "text/html", body = String),
        (status = 500, description = "Movie provider unavailable", content_type = "text/html", body = String)
    ),
    tag = "Movies"
)]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    match MovieService::popular(&state).await {
        Ok(movies) => HtmlPage(IndexTemplate { movies }, StatusCode::OK).into_response(),
        Err(e) => PageError::from(e).into_response(),
    }
}

/// Search movies by title
#[utoipa::path(
    get,
    path = "/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching movies, possibly none", content_type = "text/html", body = String),
        (status = 500, description = "Movie provider unavailable", content_type = "text/html", body = String)
    ),
    tag = "Movies"
)]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let query = params.term();
    match MovieService::search(&state, &query).await {
        Ok(movies) => HtmlPage(SearchTemplate { query, movies }, StatusCode::OK).into_response(),
        Err(e) => PageError::from(e).into_response(),
    }
}

/// Movie details
#[utoipa::path(
    get,
    path = "/movie/{id}",
    params(
        ("id" = String, Path, description = "Movie id at the metadata provider")
    ),
    responses(
        (status = 200, description = "Movie details", content_type = "text/html", body = String),
        (status = 404, description = "No cross-reference or no match at the secondary provider", content_type = "text/html", body = String),
        (status = 500, description = "Provider unavailable", content_type = "text/html", body = String)
    ),
    tag = "Movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match MovieService::details(&state, &id).await {
        Ok(movie) => HtmlPage(MovieTemplate { movie }, StatusCode::OK).into_response(),
        Err(e) => PageError::from(e).into_response(),
    }
}
