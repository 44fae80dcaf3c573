//! Business logic services for the Crop Advisory Platform

pub mod recommendation;

pub use recommendation::RecommendationService;
