//! Crop recommendation flows
//!
//! Two synchronous flows share one read-only classifier. The general flow
//! derives nutrients and climate from the reference tables; the soil-test
//! flow feeds raw measurements straight to the classifier. Neither keeps
//! any state between calls.

use std::sync::Arc;

use shared::models::{CropRecommendation, SoilTestInput};
use shared::validation::{validate_farm_size, validate_measurement};

use crate::error::{AppError, AppResult};
use crate::model::CropClassifier;
use crate::reference::ReferenceData;

/// Soil pH assumed in the general flow, where the farmer has no lab report.
/// Placeholder heuristic with no agronomic basis; kept as-is.
const ASSUMED_PH: f64 = 6.5;

/// Estimated tons of produce per acre. Placeholder heuristic with no
/// agronomic basis; kept as-is.
const YIELD_TONS_PER_ACRE: f64 = 2.5;

/// Stateless recommendation engine over a shared fitted classifier.
pub struct RecommendationService {
    classifier: Arc<CropClassifier>,
    reference: Arc<ReferenceData>,
}

impl RecommendationService {
    pub fn new(classifier: Arc<CropClassifier>, reference: Arc<ReferenceData>) -> Self {
        Self {
            classifier,
            reference,
        }
    }

    /// General flow: state and soil type stand in for measurements.
    pub fn recommend_general(
        &self,
        state: &str,
        soil_type: &str,
        farm_size_acres: f64,
    ) -> AppResult<CropRecommendation> {
        validate_farm_size(farm_size_acres)
            .map_err(|msg| AppError::validation("farm_size_acres", msg))?;

        let climate = self.reference.climate(state)?;
        let soil = self.reference.soil(soil_type)?;

        // Same order the classifier was fit on: N, P, K, temperature,
        // humidity, ph, rainfall.
        let features = [
            soil.nitrogen,
            soil.phosphorus,
            soil.potassium,
            climate.temperature_celsius,
            climate.humidity_percent,
            ASSUMED_PH,
            climate.rainfall_mm,
        ];

        let crop = self.classifier.predict(&features)?;
        let fertilizer_advice = self.reference.fertilizer_advice(&crop).to_string();

        Ok(CropRecommendation {
            crop: crop.to_uppercase(),
            fertilizer_advice,
            estimated_yield_tons: Some(estimated_yield(farm_size_acres)),
        })
    }

    /// Soil-test flow: raw measurements, no yield estimate.
    pub fn recommend_soil_test(&self, input: &SoilTestInput) -> AppResult<CropRecommendation> {
        for (field, value) in input.measurements() {
            validate_measurement(value).map_err(|msg| AppError::validation(field, msg))?;
        }

        let features = [
            input.nitrogen,
            input.phosphorus,
            input.potassium,
            input.temperature_celsius,
            input.humidity_percent,
            input.ph,
            input.rainfall_mm,
        ];

        let crop = self.classifier.predict(&features)?;
        let fertilizer_advice = self.reference.fertilizer_advice(&crop).to_string();

        Ok(CropRecommendation {
            crop: crop.to_uppercase(),
            fertilizer_advice,
            estimated_yield_tons: None,
        })
    }

    /// Number of crop labels the classifier can emit.
    pub fn known_crops(&self) -> usize {
        self.classifier.labels().len()
    }
}

/// Estimated yield in tons: farm size times the per-acre constant, rounded
/// to two decimal places.
pub fn estimated_yield(farm_size_acres: f64) -> f64 {
    (farm_size_acres * YIELD_TONS_PER_ACRE * 100.0).round() / 100.0
}
