//! HTTP surface for the engine: `GET /health`, `POST /simulate`, and
//! `POST /simulate/batch`, mirroring the in-process `simulate()` entry point
//! in `lib.rs` one-to-one.

pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/simulate", post(handlers::simulate_league))
        .route("/simulate/batch", post(handlers::simulate_batch))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
