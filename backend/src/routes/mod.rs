//! Route definitions for the Crop Advisory Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Recommendation flows
        .nest("/recommendations", recommendation_routes())
        // Form reference data
        .nest("/reference", reference_routes())
        // Classifier feature order, for presenter-side validation
        .route("/model/features", get(handlers::get_feature_names))
}

/// Recommendation routes
fn recommendation_routes() -> Router<AppState> {
    Router::new()
        .route("/general", post(handlers::recommend_general))
        .route("/soil-test", post(handlers::recommend_soil_test))
}

/// Reference data routes
fn reference_routes() -> Router<AppState> {
    Router::new()
        .route("/states", get(handlers::list_states))
        .route("/soil-types", get(handlers::list_soil_types))
        .route("/seasons", get(handlers::list_seasons))
}
