//! Feature Engineering for Energy Usage Forecasts
//!
//! Turns raw weather readings, a timestamp, and historical-usage lag values
//! into the fixed-order feature vector the trained model expects.

mod time;
mod vector;

pub use time::{parse_timestamp, TimeFeatures};
pub use vector::{FeatureVector, WeatherReadings, FEATURE_DIMENSION, FEATURE_NAMES};

use thiserror::Error;

/// Errors during feature assembly
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("unparseable timestamp: {0}")]
    InvalidTimestamp(String),
}
