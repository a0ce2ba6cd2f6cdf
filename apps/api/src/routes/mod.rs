pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::discovery::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Discovery API
        .route("/api/v1/listings", get(handlers::handle_list_listings))
        .route(
            "/api/v1/listings/featured",
            get(handlers::handle_featured),
        )
        .route("/api/v1/listings/facets", get(handlers::handle_facets))
        .route("/api/v1/listings/:id", get(handlers::handle_get_listing))
        .route(
            "/api/v1/filters/apply",
            post(handlers::handle_apply_intent),
        )
        .with_state(state)
}
