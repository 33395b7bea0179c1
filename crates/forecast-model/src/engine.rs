//! Forecast Engine
//!
//! Combines the fitted scaler and the regression model behind a single
//! predict operation. Both artifacts are loaded once at startup and shared
//! read-only for the process lifetime.

use crate::{LinearModel, Model, ModelError, Scaler, StandardScaler};
use forecast_features::FeatureVector;
use std::path::Path;
use tracing::{debug, info};

/// Inference engine holding the loaded scaler and model
pub struct ForecastEngine {
    scaler: Box<dyn Scaler>,
    model: Box<dyn Model>,
}

impl std::fmt::Debug for ForecastEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastEngine").finish_non_exhaustive()
    }
}

impl ForecastEngine {
    /// Load both artifacts from disk. Fails if either file is missing,
    /// malformed, or sized for a different feature contract.
    pub fn load(scaler_path: &Path, model_path: &Path) -> Result<Self, ModelError> {
        let scaler = StandardScaler::from_path(scaler_path)?;
        let model = LinearModel::from_path(model_path)?;
        info!("scaler and model artifacts loaded");
        Ok(Self {
            scaler: Box::new(scaler),
            model: Box::new(model),
        })
    }

    /// Build an engine from already-constructed capabilities.
    pub fn from_parts(scaler: Box<dyn Scaler>, model: Box<dyn Model>) -> Self {
        Self { scaler, model }
    }

    /// Scale the feature vector and run the model, returning the raw usage
    /// estimate in kWh.
    pub fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let scaled = self.scaler.transform(&features.as_array())?;
        let prediction = self.model.predict(&scaled)?;
        debug!(prediction, "inference complete");
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_features::{parse_timestamp, TimeFeatures, WeatherReadings, FEATURE_DIMENSION};

    fn engine(intercept: f64) -> ForecastEngine {
        let scaler =
            StandardScaler::new(vec![0.0; FEATURE_DIMENSION], vec![1.0; FEATURE_DIMENSION])
                .unwrap();
        let model = LinearModel::new(vec![0.0; FEATURE_DIMENSION], intercept).unwrap();
        ForecastEngine::from_parts(Box::new(scaler), Box::new(model))
    }

    fn sample_features() -> FeatureVector {
        let time = TimeFeatures::from_datetime(parse_timestamp("2024-03-18T10:00").unwrap());
        let weather = WeatherReadings {
            air_temperature: 20.0,
            dew_point_temperature: 10.0,
            relative_humidity: 50.0,
            wind_speed: 2.0,
            wind_direction: 90.0,
        };
        FeatureVector::assemble(&weather, &time, 2.0, 2.2)
    }

    #[test]
    fn test_predict_through_both_stages() {
        // Zero coefficients make the output the intercept regardless of input.
        let value = engine(3.5).predict(&sample_features()).unwrap();
        assert_eq!(value, 3.5);
    }

    #[test]
    fn test_scaling_feeds_model() {
        let mut mean = vec![0.0; FEATURE_DIMENSION];
        mean[0] = 10.0; // air_temperature standardizes to (20 - 10) / 1 = 10
        let scaler = StandardScaler::new(mean, vec![1.0; FEATURE_DIMENSION]).unwrap();
        let mut coefficients = vec![0.0; FEATURE_DIMENSION];
        coefficients[0] = 1.0;
        let model = LinearModel::new(coefficients, 0.0).unwrap();

        let engine = ForecastEngine::from_parts(Box::new(scaler), Box::new(model));
        assert_eq!(engine.predict(&sample_features()).unwrap(), 10.0);
    }

    #[test]
    fn test_load_missing_artifacts() {
        let err = ForecastEngine::load(
            Path::new("/nonexistent/scaler.json"),
            Path::new("/nonexistent/model.json"),
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::ArtifactRead { .. }));
    }
}
