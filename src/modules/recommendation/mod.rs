use axum::Router;
use axum::routing::get;
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod service;
pub mod view;

pub fn router() -> Router<AppState> {
    Router::new().route("/recommendations", get(handler::recommendations))
}
