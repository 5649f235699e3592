use axum::Router;
use axum::routing::get;
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod service;
pub mod view;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::home))
        .route("/search", get(handler::search))
        .route("/movie/{id}", get(handler::get_movie))
}
