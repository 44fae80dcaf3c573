//! HTTP handlers for the recommendation flows

use axum::{extract::State, Json};
use serde::Serialize;

use shared::models::{CropRecommendation, GeneralRecommendationInput, SoilTestInput};
use shared::validation::validate_farmer_name;

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Response for the general flow, echoing the farmer details the way the
/// result card displays them.
#[derive(Debug, Serialize)]
pub struct GeneralRecommendationResponse {
    pub farmer_name: String,
    pub state: String,
    pub district: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(flatten)]
    pub recommendation: CropRecommendation,
}

/// General flow: derive climate and nutrients from the state and soil type
pub async fn recommend_general(
    State(state): State<AppState>,
    Json(input): Json<GeneralRecommendationInput>,
) -> AppResult<Json<GeneralRecommendationResponse>> {
    // Reject incomplete farmer details before the model is consulted
    validate_farmer_name(&input.farmer_name)
        .map_err(|msg| AppError::validation("farmer_name", msg))?;

    if !state.reference.is_district_of(&input.state, &input.district) {
        return Err(AppError::validation(
            "district",
            format!("'{}' is not a district of {}", input.district, input.state),
        ));
    }

    let recommendation = state.recommendations.recommend_general(
        &input.state,
        &input.soil_type,
        input.farm_size_acres,
    )?;

    Ok(Json(GeneralRecommendationResponse {
        farmer_name: input.farmer_name,
        state: input.state,
        district: input.district,
        season: input.season,
        recommendation,
    }))
}

/// Soil-test flow: raw measurements straight to the classifier
pub async fn recommend_soil_test(
    State(state): State<AppState>,
    Json(input): Json<SoilTestInput>,
) -> AppResult<Json<CropRecommendation>> {
    let recommendation = state.recommendations.recommend_soil_test(&input)?;
    Ok(Json(recommendation))
}
