//! Validation utilities for the Crop Advisory Platform

/// Validate the farmer name is present
pub fn validate_farmer_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Farmer name must not be blank");
    }
    Ok(())
}

/// Validate the farm size is a positive number of acres
pub fn validate_farm_size(acres: f64) -> Result<(), &'static str> {
    if !acres.is_finite() {
        return Err("Farm size must be a number");
    }
    if acres <= 0.0 {
        return Err("Farm size must be greater than zero");
    }
    Ok(())
}

/// Validate a soil-test measurement is a non-negative number
pub fn validate_measurement(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() {
        return Err("Measurement must be a number");
    }
    if value < 0.0 {
        return Err("Measurement must not be negative");
    }
    Ok(())
}
