pub mod handlers;
pub mod pages;

#[cfg(test)]
mod tests;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::convert))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
