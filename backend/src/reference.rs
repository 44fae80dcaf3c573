//! Embedded agronomic reference tables
//!
//! State climate averages, soil nutrient profiles and fertilizer advice
//! ship as configuration literals; adding a state, soil type or crop means
//! editing these tables. The tables are built once at startup and injected
//! into the recommendation service, so tests can substitute synthetic ones.

use std::collections::BTreeMap;

use shared::models::{ClimateProfile, SoilProfile, StateInfo};

use crate::error::{AppError, AppResult};

/// Advice for any predicted crop missing from the fertilizer table.
pub const DEFAULT_FERTILIZER_ADVICE: &str = "Use balanced NPK fertilizer and organic compost.";

/// Farming seasons offered by the form. Recorded with the request but not
/// used in prediction.
pub const SEASONS: [&str; 3] = [
    "Kharif (June - October | Rainy Season)",
    "Rabi (November - March | Winter Season)",
    "Summer (April - May | Hot Season)",
];

/// Immutable reference tables backing the general flow.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    districts: BTreeMap<String, Vec<String>>,
    climates: BTreeMap<String, ClimateProfile>,
    soils: BTreeMap<String, SoilProfile>,
    /// Keyed by lowercase crop label.
    fertilizers: BTreeMap<String, String>,
}

impl ReferenceData {
    /// Build from explicit tables. Fertilizer keys are lowercased here so
    /// lookups stay case-insensitive regardless of how the table was
    /// written.
    pub fn new(
        districts: BTreeMap<String, Vec<String>>,
        climates: BTreeMap<String, ClimateProfile>,
        soils: BTreeMap<String, SoilProfile>,
        fertilizers: BTreeMap<String, String>,
    ) -> Self {
        let fertilizers = fertilizers
            .into_iter()
            .map(|(crop, advice)| (crop.to_lowercase(), advice))
            .collect();
        Self {
            districts,
            climates,
            soils,
            fertilizers,
        }
    }

    /// The production tables for India.
    pub fn india() -> Self {
        let states: [(&str, [&str; 3]); 13] = [
            ("Andhra Pradesh", ["Visakhapatnam", "Vijayawada", "Guntur"]),
            ("Assam", ["Guwahati", "Dibrugarh", "Silchar"]),
            ("Bihar", ["Patna", "Gaya", "Muzaffarpur"]),
            ("Gujarat", ["Ahmedabad", "Surat", "Vadodara"]),
            ("Karnataka", ["Bengaluru", "Mysuru", "Hubli"]),
            ("Kerala", ["Thiruvananthapuram", "Kochi", "Kozhikode"]),
            ("Maharashtra", ["Mumbai", "Pune", "Nagpur"]),
            ("Punjab", ["Ludhiana", "Amritsar", "Patiala"]),
            ("Rajasthan", ["Jaipur", "Jodhpur", "Udaipur"]),
            ("Tamil Nadu", ["Chennai", "Coimbatore", "Madurai"]),
            ("Telangana", ["Hyderabad", "Warangal", "Nizamabad"]),
            ("Uttar Pradesh", ["Lucknow", "Kanpur", "Varanasi"]),
            ("West Bengal", ["Kolkata", "Siliguri", "Durgapur"]),
        ];

        let mut districts = BTreeMap::new();
        let mut climates = BTreeMap::new();
        for (state, names) in states {
            districts.insert(
                state.to_string(),
                names.iter().map(|d| d.to_string()).collect(),
            );
            // Every state currently carries the same long-run averages.
            climates.insert(
                state.to_string(),
                ClimateProfile {
                    temperature_celsius: 28.0,
                    rainfall_mm: 110.0,
                    humidity_percent: 65.0,
                },
            );
        }

        let soils = BTreeMap::from([
            ("Black Soil".to_string(), soil(80.0, 60.0, 70.0)),
            ("Red Soil".to_string(), soil(50.0, 40.0, 50.0)),
            ("Sandy Soil".to_string(), soil(30.0, 20.0, 30.0)),
            ("Clay Soil".to_string(), soil(70.0, 50.0, 60.0)),
            ("Alluvial Soil".to_string(), soil(65.0, 55.0, 65.0)),
        ]);

        let fertilizers = BTreeMap::from(
            [
                ("rice", "Use Urea and DAP for better nitrogen support."),
                ("wheat", "Apply NPK fertilizer (20-20-0) during early growth stage."),
                ("maize", "Use Urea and Potash fertilizers."),
                ("cotton", "Apply NPK (30-15-15) and organic compost."),
                ("sugarcane", "Use high nitrogen fertilizers and farmyard manure."),
                ("banana", "Apply Potassium-rich fertilizer."),
                ("mango", "Use organic compost and balanced NPK."),
                ("grapes", "Apply Super Phosphate and Potash."),
            ]
            .map(|(crop, advice)| (crop.to_string(), advice.to_string())),
        );

        Self::new(districts, climates, soils, fertilizers)
    }

    /// Climate averages for a state. The form only offers known states, so
    /// a miss is a configuration problem, not user error.
    pub fn climate(&self, state: &str) -> AppResult<&ClimateProfile> {
        self.climates
            .get(state)
            .ok_or_else(|| AppError::Configuration(format!("unknown state: {}", state)))
    }

    /// Nutrient profile for a soil type. Same contract as [`Self::climate`].
    pub fn soil(&self, soil_type: &str) -> AppResult<&SoilProfile> {
        self.soils
            .get(soil_type)
            .ok_or_else(|| AppError::Configuration(format!("unknown soil type: {}", soil_type)))
    }

    /// Fertilizer advice for a crop, case-insensitive, with the generic
    /// fallback for crops not in the table. Never fails.
    pub fn fertilizer_advice(&self, crop: &str) -> &str {
        self.fertilizers
            .get(&crop.to_lowercase())
            .map(String::as_str)
            .unwrap_or(DEFAULT_FERTILIZER_ADVICE)
    }

    /// States with their districts, for the form.
    pub fn states(&self) -> Vec<StateInfo> {
        self.districts
            .iter()
            .map(|(name, districts)| StateInfo {
                name: name.clone(),
                districts: districts.clone(),
            })
            .collect()
    }

    /// Soil types the form offers.
    pub fn soil_types(&self) -> Vec<String> {
        self.soils.keys().cloned().collect()
    }

    pub fn is_district_of(&self, state: &str, district: &str) -> bool {
        self.districts
            .get(state)
            .map(|ds| ds.iter().any(|d| d == district))
            .unwrap_or(false)
    }
}

fn soil(nitrogen: f64, phosphorus: f64, potassium: f64) -> SoilProfile {
    SoilProfile {
        nitrogen,
        phosphorus,
        potassium,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_state_has_climate_and_districts() {
        let reference = ReferenceData::india();
        let states = reference.states();
        assert_eq!(states.len(), 13);
        for state in states {
            assert_eq!(state.districts.len(), 3, "state {}", state.name);
            assert!(reference.climate(&state.name).is_ok());
        }
    }

    #[test]
    fn test_five_soil_types() {
        let reference = ReferenceData::india();
        assert_eq!(reference.soil_types().len(), 5);
        let black = reference.soil("Black Soil").unwrap();
        assert_eq!(black.nitrogen, 80.0);
        assert_eq!(black.phosphorus, 60.0);
        assert_eq!(black.potassium, 70.0);
    }

    #[test]
    fn test_unknown_keys_are_configuration_errors() {
        let reference = ReferenceData::india();
        assert!(matches!(
            reference.climate("Atlantis"),
            Err(AppError::Configuration(_))
        ));
        assert!(matches!(
            reference.soil("Moon Dust"),
            Err(AppError::Configuration(_))
        ));
    }

    #[test]
    fn test_fertilizer_lookup_case_insensitive() {
        let reference = ReferenceData::india();
        let advice = reference.fertilizer_advice("RICE");
        assert_eq!(advice, "Use Urea and DAP for better nitrogen support.");
        assert_eq!(advice, reference.fertilizer_advice("rice"));
    }

    #[test]
    fn test_fertilizer_fallback_for_unknown_crop() {
        let reference = ReferenceData::india();
        assert_eq!(
            reference.fertilizer_advice("dragonfruit"),
            DEFAULT_FERTILIZER_ADVICE
        );
    }

    #[test]
    fn test_district_membership() {
        let reference = ReferenceData::india();
        assert!(reference.is_district_of("Punjab", "Amritsar"));
        assert!(!reference.is_district_of("Punjab", "Chennai"));
        assert!(!reference.is_district_of("Atlantis", "Amritsar"));
    }
}
