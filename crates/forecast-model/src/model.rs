//! Regression Model

use crate::ModelError;
use forecast_features::FEATURE_DIMENSION;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// A trained predictive model mapping a scaled feature vector to a single
/// usage estimate in kWh.
pub trait Model: Send + Sync {
    /// Predict usage from an already-scaled feature vector.
    fn predict(&self, features: &[f64]) -> Result<f64, ModelError>;
}

/// Linear regression artifact: dot product plus intercept.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearModel {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    /// Load a model artifact from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ModelError::ArtifactRead {
            path: path.display().to_string(),
            source,
        })?;
        let model: Self =
            serde_json::from_str(&raw).map_err(|source| ModelError::ArtifactParse {
                path: path.display().to_string(),
                source,
            })?;
        model.validate()?;
        info!(path = %path.display(), features = model.coefficients.len(), "model loaded");
        Ok(model)
    }

    /// Build a model from fitted parameters.
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Result<Self, ModelError> {
        let model = Self {
            coefficients,
            intercept,
        };
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.coefficients.len() != FEATURE_DIMENSION {
            return Err(ModelError::DimensionMismatch {
                expected: FEATURE_DIMENSION,
                actual: self.coefficients.len(),
            });
        }
        Ok(())
    }
}

impl Model for LinearModel {
    fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }
        let dot: f64 = features
            .iter()
            .zip(self.coefficients.iter())
            .map(|(x, w)| x * w)
            .sum();
        Ok(dot + self.intercept)
    }
}
