use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/prices",
            get(handlers::prices::prices_get).fallback(handlers::prices::method_not_allowed),
        )
        // The front end is served from its own origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
