//! # DayCoach App
//!
//! HTTP surface of the DayCoach server:
//!
//! - Route handlers under [`routes`]
//! - Shared handler state in [`state`]
//! - JSON error mapping in [`error`]
//!
//! The router serves the JSON API first and falls back to the static web
//! client for every other path.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        .merge(routes::health::router())
        .merge(routes::auth::router())
        .merge(routes::calendar::router())
        .merge(routes::analyze::router())
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
