//! HTTP handlers for the Crop Advisory Platform

pub mod health;
pub mod recommendation;
pub mod reference;

pub use health::health_check;
pub use recommendation::{recommend_general, recommend_soil_test};
pub use reference::{get_feature_names, list_seasons, list_soil_types, list_states};
