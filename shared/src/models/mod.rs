//! Data models for the Crop Advisory Platform

pub mod recommendation;
pub mod reference;

pub use recommendation::*;
pub use reference::*;
