//! HTTP handlers for form reference data

use axum::{extract::State, Json};

use shared::models::StateInfo;

use crate::model::FEATURE_NAMES;
use crate::reference::SEASONS;
use crate::AppState;

/// States with their districts
pub async fn list_states(State(state): State<AppState>) -> Json<Vec<StateInfo>> {
    Json(state.reference.states())
}

/// Soil types the form offers
pub async fn list_soil_types(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.reference.soil_types())
}

/// Farming seasons the form offers
pub async fn list_seasons() -> Json<Vec<String>> {
    Json(SEASONS.iter().map(|s| s.to_string()).collect())
}

/// The ordered feature-name list the classifier was fit on, for
/// presenter-side validation
pub async fn get_feature_names() -> Json<Vec<String>> {
    Json(FEATURE_NAMES.iter().map(|f| f.to_string()).collect())
}
