//! Crop classifier training and inference

pub mod classifier;
pub mod training_data;

pub use classifier::CropClassifier;
pub use training_data::{Sample, TrainingData, FEATURE_NAMES};
