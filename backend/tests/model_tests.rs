//! Classifier training tests against the shipped table
//!
//! Covers the fatal-startup contract and the feature ordering invariant.

use crop_advisory_backend::config::ModelConfig;
use crop_advisory_backend::error::AppError;
use crop_advisory_backend::model::{CropClassifier, TrainingData};

const TRAINING_DATA: &str = "../data/crop_recommendation.csv";

fn model_config() -> ModelConfig {
    ModelConfig {
        training_data: TRAINING_DATA.to_string(),
        n_trees: 100,
        seed: 42,
    }
}

#[test]
fn test_shipped_table_loads() {
    let data = TrainingData::from_path(TRAINING_DATA).unwrap();
    assert_eq!(data.len(), 120);
    assert_eq!(data.label_count(), 10);
}

#[test]
fn test_missing_table_is_fatal() {
    let err = TrainingData::from_path("../data/no_such_file.csv").unwrap_err();
    assert!(matches!(err, AppError::Configuration(_)));
}

#[test]
fn test_classifier_fits_training_distribution() {
    let data = TrainingData::from_path(TRAINING_DATA).unwrap();
    let classifier = CropClassifier::fit(&data, &model_config()).unwrap();

    // The forest sees every sample during the fit, so it should get nearly
    // all of them back right.
    let correct = data
        .samples()
        .iter()
        .filter(|s| classifier.predict(&s.features).unwrap() == s.label)
        .count();
    assert!(
        correct * 10 >= data.len() * 9,
        "only {}/{} training samples recovered",
        correct,
        data.len()
    );
}

#[test]
fn test_refit_with_same_seed_predicts_identically() {
    let data = TrainingData::from_path(TRAINING_DATA).unwrap();
    let a = CropClassifier::fit(&data, &model_config()).unwrap();
    let b = CropClassifier::fit(&data, &model_config()).unwrap();

    for sample in data.samples() {
        assert_eq!(
            a.predict(&sample.features).unwrap(),
            b.predict(&sample.features).unwrap()
        );
    }
}

/// Regression guard for the feature ordering invariant: vectors assembled
/// with humidity and ph transposed must not predict like the originals.
#[test]
fn test_swapping_humidity_and_ph_changes_predictions() {
    let data = TrainingData::from_path(TRAINING_DATA).unwrap();
    let classifier = CropClassifier::fit(&data, &model_config()).unwrap();

    let mut changed = 0;
    for sample in data.samples() {
        let mut swapped = sample.features;
        swapped.swap(4, 5);

        if classifier.predict(&swapped).unwrap() != classifier.predict(&sample.features).unwrap() {
            changed += 1;
        }
    }
    assert!(changed > 0, "transposed vectors predicted identically everywhere");
}
