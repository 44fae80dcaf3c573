//! Crop Advisory Platform - Backend
//!
//! Serves crop recommendations, fertilizer suggestions and yield estimates
//! for Indian farmers. A random-forest classifier is trained once at
//! startup from a static labeled table and shared read-only by every
//! request.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod reference;
pub mod routes;
pub mod services;

pub use config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub recommendations: Arc<services::RecommendationService>,
    pub reference: Arc<reference::ReferenceData>,
    pub config: Arc<Config>,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(liveness))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Crop Advisory Platform API v1.0"
}

/// Liveness endpoint
async fn liveness() -> &'static str {
    "OK"
}
