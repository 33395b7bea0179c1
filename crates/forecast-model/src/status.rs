//! Usage Status Classification

use serde::{Deserialize, Serialize};

/// Prediction-to-yesterday ratio above which usage counts as high.
const HIGH_RATIO: f64 = 1.15;
/// Ratio below which usage counts as low.
const LOW_RATIO: f64 = 0.85;

/// Heuristic usage status relative to the same hour yesterday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsageStatus {
    High,
    Low,
    Normal,
}

impl UsageStatus {
    /// Classify a prediction against the 24h lag. High is checked before
    /// Low; both thresholds are strict inequalities. The comparison is done
    /// on the prediction-to-lag ratio so that a prediction sitting exactly
    /// on a threshold (115 against a lag of 100) stays Normal instead of
    /// tipping over on the rounding of `lag * 1.15`.
    pub fn classify(prediction: f64, lag_24h: f64) -> Self {
        let ratio = prediction / lag_24h;
        if ratio > HIGH_RATIO {
            UsageStatus::High
        } else if ratio < LOW_RATIO {
            UsageStatus::Low
        } else {
            UsageStatus::Normal
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageStatus::High => "High",
            UsageStatus::Low => "Low",
            UsageStatus::Normal => "Normal",
        }
    }

    /// Get the advisory message shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            UsageStatus::High => {
                "Usage is significantly higher than yesterday. Consider reducing AC or heavy appliances."
            }
            UsageStatus::Low => "Usage is lower than yesterday. Good job saving energy!",
            UsageStatus::Normal => "Usage is within the normal range.",
        }
    }
}
