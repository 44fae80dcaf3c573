//! Recommendation request and response models

use serde::{Deserialize, Serialize};

/// Input for the general flow: the farmer picks a state, district and soil
/// type and the backend derives climate and nutrient values.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralRecommendationInput {
    pub farmer_name: String,
    pub farm_size_acres: f64,
    pub state: String,
    pub district: String,
    pub soil_type: String,
    /// Display string only; the classifier does not use the season.
    pub season: Option<String>,
}

/// Input for the soil-test flow: raw measurements from a lab report.
#[derive(Debug, Clone, Deserialize)]
pub struct SoilTestInput {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub ph: f64,
    pub rainfall_mm: f64,
}

impl SoilTestInput {
    /// Field name and value pairs, in classifier feature order.
    pub fn measurements(&self) -> [(&'static str, f64); 7] {
        [
            ("nitrogen", self.nitrogen),
            ("phosphorus", self.phosphorus),
            ("potassium", self.potassium),
            ("temperature_celsius", self.temperature_celsius),
            ("humidity_percent", self.humidity_percent),
            ("ph", self.ph),
            ("rainfall_mm", self.rainfall_mm),
        ]
    }
}

/// The recommendation returned by both flows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropRecommendation {
    /// Crop label, upper-cased for display.
    pub crop: String,
    pub fertilizer_advice: String,
    /// Only produced by the general flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_yield_tons: Option<f64>,
}
