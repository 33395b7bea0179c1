//! Forecast Model Inference
//!
//! Loads the scaler and regression artifacts produced by the training
//! pipeline and runs them behind narrow capability traits.

mod engine;
mod model;
mod scaler;
mod status;

pub use engine::ForecastEngine;
pub use model::{LinearModel, Model};
pub use scaler::{Scaler, StandardScaler};
pub use status::UsageStatus;

use thiserror::Error;

/// Errors during artifact loading or inference
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read artifact {path}: {source}")]
    ArtifactRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse artifact {path}: {source}")]
    ArtifactParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("artifact dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("scaler has zero scale at feature index {0}")]
    DegenerateScale(usize),
}
