//! Reference-data value types
//!
//! The actual tables (which states, which soils, which crops) are embedded
//! configuration owned by the backend; these are just the values they map to.

use serde::{Deserialize, Serialize};

/// Long-run average climate for a state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimateProfile {
    pub temperature_celsius: f64,
    pub rainfall_mm: f64,
    pub humidity_percent: f64,
}

/// Typical nutrient levels for a soil type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilProfile {
    /// Nitrogen (N)
    pub nitrogen: f64,
    /// Phosphorus (P)
    pub phosphorus: f64,
    /// Potassium (K)
    pub potassium: f64,
}

/// A state and the districts the form offers for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateInfo {
    pub name: String,
    pub districts: Vec<String>,
}
