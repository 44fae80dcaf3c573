//! Shared types and models for the Crop Advisory Platform
//!
//! This crate contains types shared between the backend and any future
//! frontends of the system.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
