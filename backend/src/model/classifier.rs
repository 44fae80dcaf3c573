//! Seeded random-forest crop classifier
//!
//! The stock ensemble with default hyperparameters is the whole model: one
//! fit on the full table, no train/test split, no search. The seed is fixed
//! so two fits on identical data predict identically.

use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::config::ModelConfig;
use crate::error::{AppError, AppResult};

use super::training_data::TrainingData;

/// A crop classifier, fitted once and read-only afterwards.
pub struct CropClassifier {
    forest: RandomForestClassifier<f64, u32, DenseMatrix<f64>, Vec<u32>>,
    /// Class index to lowercase crop label.
    labels: Vec<String>,
}

impl CropClassifier {
    /// Fit the forest on the full training table.
    pub fn fit(data: &TrainingData, config: &ModelConfig) -> AppResult<Self> {
        let mut labels: Vec<String> = data.samples().iter().map(|s| s.label.clone()).collect();
        labels.sort();
        labels.dedup();

        let class_of = |label: &str| -> AppResult<u32> {
            labels
                .binary_search_by(|l| l.as_str().cmp(label))
                .map(|i| i as u32)
                .map_err(|_| {
                    AppError::Configuration(format!("label '{}' missing from class table", label))
                })
        };

        let rows: Vec<Vec<f64>> = data.samples().iter().map(|s| s.features.to_vec()).collect();
        let targets: Vec<u32> = data
            .samples()
            .iter()
            .map(|s| class_of(&s.label))
            .collect::<AppResult<_>>()?;

        let x = DenseMatrix::from_2d_vec(&rows)
            .map_err(|e| AppError::Configuration(format!("training matrix: {}", e)))?;

        let params = RandomForestClassifierParameters::default()
            .with_n_trees(config.n_trees)
            .with_seed(config.seed);

        let forest = RandomForestClassifier::fit(&x, &targets, params)
            .map_err(|e| AppError::Configuration(format!("classifier fit failed: {}", e)))?;

        Ok(Self { forest, labels })
    }

    /// Predict the crop label for one feature vector, ordered as
    /// [`FEATURE_NAMES`](super::training_data::FEATURE_NAMES).
    pub fn predict(&self, features: &[f64; 7]) -> AppResult<String> {
        let x = DenseMatrix::from_2d_vec(&vec![features.to_vec()])
            .map_err(|e| AppError::Internal(anyhow::anyhow!("feature matrix: {}", e)))?;

        let classes = self
            .forest
            .predict(&x)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("prediction failed: {}", e)))?;

        let class = classes
            .first()
            .copied()
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("classifier returned no class")))?;

        self.labels
            .get(class as usize)
            .cloned()
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("class {} out of range", class)))
    }

    /// Crop labels the classifier can emit, sorted.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::training_data::Sample;

    fn sample(features: [f64; 7], label: &str) -> Sample {
        Sample {
            features,
            label: label.to_string(),
        }
    }

    /// Two crops separated cleanly by nitrogen and rainfall.
    fn toy_table() -> TrainingData {
        let mut samples = Vec::new();
        for i in 0..10 {
            let jitter = i as f64;
            samples.push(sample(
                [90.0 + jitter, 45.0, 40.0, 24.0, 82.0, 6.4, 220.0 + jitter],
                "rice",
            ));
            samples.push(sample(
                [20.0 + jitter, 27.0, 30.0, 31.0, 50.0, 5.7, 95.0 + jitter],
                "mango",
            ));
        }
        TrainingData::from_samples(samples).unwrap()
    }

    fn toy_config() -> ModelConfig {
        ModelConfig {
            training_data: String::new(),
            n_trees: 32,
            seed: 42,
        }
    }

    #[test]
    fn test_fit_and_predict_separable_classes() {
        let classifier = CropClassifier::fit(&toy_table(), &toy_config()).unwrap();
        assert_eq!(classifier.labels(), ["mango", "rice"]);

        let rice = classifier
            .predict(&[92.0, 45.0, 40.0, 24.0, 82.0, 6.4, 225.0])
            .unwrap();
        assert_eq!(rice, "rice");

        let mango = classifier
            .predict(&[22.0, 27.0, 30.0, 31.0, 50.0, 5.7, 98.0])
            .unwrap();
        assert_eq!(mango, "mango");
    }

    #[test]
    fn test_same_seed_same_predictions() {
        let data = toy_table();
        let a = CropClassifier::fit(&data, &toy_config()).unwrap();
        let b = CropClassifier::fit(&data, &toy_config()).unwrap();

        for s in data.samples() {
            assert_eq!(a.predict(&s.features).unwrap(), b.predict(&s.features).unwrap());
        }
    }

    #[test]
    fn test_repeated_predictions_identical() {
        let classifier = CropClassifier::fit(&toy_table(), &toy_config()).unwrap();
        let vector = [55.0, 36.0, 35.0, 27.0, 66.0, 6.0, 150.0];
        let first = classifier.predict(&vector).unwrap();
        for _ in 0..10 {
            assert_eq!(classifier.predict(&vector).unwrap(), first);
        }
    }
}
