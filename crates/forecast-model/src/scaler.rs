//! Feature Scaling

use crate::ModelError;
use forecast_features::FEATURE_DIMENSION;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// A fitted feature transform applied before inference. Must match the
/// transform used at training time.
pub trait Scaler: Send + Sync {
    /// Transform a raw feature vector into model space.
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ModelError>;
}

/// Standardization scaler: `(x - mean) / scale` per feature.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Load a scaler artifact from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ModelError::ArtifactRead {
            path: path.display().to_string(),
            source,
        })?;
        let scaler: Self =
            serde_json::from_str(&raw).map_err(|source| ModelError::ArtifactParse {
                path: path.display().to_string(),
                source,
            })?;
        scaler.validate()?;
        info!(path = %path.display(), features = scaler.mean.len(), "scaler loaded");
        Ok(scaler)
    }

    /// Build a scaler from fitted parameters.
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, ModelError> {
        let scaler = Self { mean, scale };
        scaler.validate()?;
        Ok(scaler)
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.mean.len() != FEATURE_DIMENSION {
            return Err(ModelError::DimensionMismatch {
                expected: FEATURE_DIMENSION,
                actual: self.mean.len(),
            });
        }
        if self.scale.len() != self.mean.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.mean.len(),
                actual: self.scale.len(),
            });
        }
        if let Some(idx) = self.scale.iter().position(|s| *s == 0.0) {
            return Err(ModelError::DegenerateScale(idx));
        }
        Ok(())
    }
}

impl Scaler for StandardScaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ModelError> {
        if features.len() != self.mean.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.mean.len(),
                actual: features.len(),
            });
        }
        Ok(features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect())
    }
}
