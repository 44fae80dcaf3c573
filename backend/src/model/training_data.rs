//! Training table ingestion
//!
//! The classifier is trained from a CSV of labeled agronomic samples, read
//! exactly once at startup. Any structural deviation (missing column,
//! non-numeric cell, empty table) is fatal: without a model there is no
//! service.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Feature columns, in the exact order the classifier is fit on.
///
/// Inference must assemble vectors in this same order; a reordered vector
/// produces silently wrong predictions.
pub const FEATURE_NAMES: [&str; 7] = [
    "N",
    "P",
    "K",
    "temperature",
    "humidity",
    "ph",
    "rainfall",
];

/// Name of the label column in the training table.
pub const LABEL_COLUMN: &str = "label";

/// A single labeled training record.
#[derive(Debug, Clone)]
pub struct Sample {
    /// Values ordered as [`FEATURE_NAMES`].
    pub features: [f64; 7],
    /// Crop label, lowercase-normalized.
    pub label: String,
}

/// The full training table, immutable once loaded.
#[derive(Debug, Clone)]
pub struct TrainingData {
    samples: Vec<Sample>,
}

impl TrainingData {
    /// Load the training table from a CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AppError::Configuration(format!(
                "cannot open training data {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_reader(file)
    }

    /// Parse a training table from any reader.
    ///
    /// The header must contain every column in [`FEATURE_NAMES`] plus
    /// [`LABEL_COLUMN`]; extra columns are ignored.
    pub fn from_reader(reader: impl Read) -> AppResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| AppError::Configuration(format!("unreadable training header: {}", e)))?
            .clone();

        let column = |name: &str| -> AppResult<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| {
                    AppError::Configuration(format!("training data missing column '{}'", name))
                })
        };

        let label_idx = column(LABEL_COLUMN)?;
        let mut feature_idx = [0usize; 7];
        for (slot, name) in FEATURE_NAMES.iter().copied().enumerate() {
            feature_idx[slot] = column(name)?;
        }

        let mut samples = Vec::new();
        for (row, record) in csv_reader.records().enumerate() {
            let record = record.map_err(|e| {
                AppError::Configuration(format!("unreadable training row {}: {}", row + 2, e))
            })?;

            let mut features = [0.0f64; 7];
            for (slot, &idx) in feature_idx.iter().enumerate() {
                let raw = record.get(idx).ok_or_else(|| {
                    AppError::Configuration(format!("short training row {}", row + 2))
                })?;
                features[slot] = raw.trim().parse().map_err(|_| {
                    AppError::Configuration(format!(
                        "non-numeric value '{}' in column '{}' at row {}",
                        raw,
                        FEATURE_NAMES[slot],
                        row + 2
                    ))
                })?;
            }

            let label = record
                .get(label_idx)
                .ok_or_else(|| AppError::Configuration(format!("short training row {}", row + 2)))?
                .trim()
                .to_lowercase();
            if label.is_empty() {
                return Err(AppError::Configuration(format!(
                    "empty label at row {}",
                    row + 2
                )));
            }

            samples.push(Sample { features, label });
        }

        Self::from_samples(samples)
    }

    /// Build a table directly from samples. Used by tests with synthetic
    /// data; the empty-table check still applies.
    pub fn from_samples(samples: Vec<Sample>) -> AppResult<Self> {
        if samples.is_empty() {
            return Err(AppError::Configuration(
                "training data contains no samples".to_string(),
            ));
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of distinct crop labels in the table.
    pub fn label_count(&self) -> usize {
        let mut labels: Vec<&str> = self.samples.iter().map(|s| s.label.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();
        labels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_CSV: &str = "\
N,P,K,temperature,humidity,ph,rainfall,label
90,42,43,20.8,82.0,6.5,202.9,Rice
85,58,41,21.7,80.3,7.0,226.6,rice
71,54,16,22.6,63.6,5.7,87.7,maize
";

    #[test]
    fn test_parse_well_formed_table() {
        let data = TrainingData::from_reader(GOOD_CSV.as_bytes()).unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data.label_count(), 2);
        assert_eq!(data.samples()[0].features[0], 90.0);
        assert_eq!(data.samples()[0].features[6], 202.9);
    }

    #[test]
    fn test_labels_lowercase_normalized() {
        let data = TrainingData::from_reader(GOOD_CSV.as_bytes()).unwrap();
        assert_eq!(data.samples()[0].label, "rice");
        assert_eq!(data.samples()[1].label, "rice");
    }

    #[test]
    fn test_missing_label_column_is_fatal() {
        let csv = "N,P,K,temperature,humidity,ph,rainfall\n90,42,43,20.8,82.0,6.5,202.9\n";
        let err = TrainingData::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
        assert!(err.to_string().contains("label"));
    }

    #[test]
    fn test_missing_feature_column_is_fatal() {
        let csv = "N,P,K,temperature,humidity,rainfall,label\n90,42,43,20.8,82.0,202.9,rice\n";
        let err = TrainingData::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
        assert!(err.to_string().contains("ph"));
    }

    #[test]
    fn test_non_numeric_cell_is_fatal() {
        let csv = "N,P,K,temperature,humidity,ph,rainfall,label\n90,42,forty,20.8,82.0,6.5,202.9,rice\n";
        let err = TrainingData::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn test_empty_table_is_fatal() {
        let csv = "N,P,K,temperature,humidity,ph,rainfall,label\n";
        let err = TrainingData::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let csv = "\
district,N,P,K,temperature,humidity,ph,rainfall,label
Guntur,90,42,43,20.8,82.0,6.5,202.9,rice
";
        let data = TrainingData::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data.samples()[0].features[0], 90.0);
    }
}
