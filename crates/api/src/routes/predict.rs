//! Prediction Route

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use metrics::counter;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::{ApiError, AppState};
use forecast_features::{parse_timestamp, FeatureVector, TimeFeatures, WeatherReadings};
use forecast_model::UsageStatus;

/// Prediction request body. Numeric fields accept a JSON number or a
/// numeric string, since the landing page submits form values as strings.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(deserialize_with = "flexible_f64")]
    pub air_temperature: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub dew_point_temperature: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub relative_humidity: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub wind_speed: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub wind_direction: f64,
    /// ISO-parseable datetime string
    pub timestamp: String,
    #[serde(deserialize_with = "flexible_f64")]
    pub lag_1h: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub lag_24h: f64,
}

/// Prediction response body
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Forecast usage in kWh, rounded to 2 decimal places
    pub prediction: f64,
    /// Usage status label: High, Low, or Normal
    pub status: &'static str,
    /// Advisory message for the status
    pub message: &'static str,
}

/// Handle `POST /predict`
pub async fn predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let result = run_predict(&state, payload);
    match &result {
        Ok(_) => counter!("predict_requests_total", "outcome" => "ok").increment(1),
        Err(err) => {
            counter!("predict_requests_total", "outcome" => err.metric_label()).increment(1)
        }
    }
    result
}

fn run_predict(
    state: &AppState,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    // Degraded mode is reported before the body is even validated.
    let engine = state.engine.as_ref().ok_or(ApiError::ModelUnavailable)?;

    let Json(request) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

    let timestamp = parse_timestamp(&request.timestamp)
        .map_err(|err| ApiError::Validation(err.to_string()))?;
    let time = TimeFeatures::from_datetime(timestamp);

    let weather = WeatherReadings {
        air_temperature: request.air_temperature,
        dew_point_temperature: request.dew_point_temperature,
        relative_humidity: request.relative_humidity,
        wind_speed: request.wind_speed,
        wind_direction: request.wind_direction,
    };
    let features = FeatureVector::assemble(&weather, &time, request.lag_1h, request.lag_24h);

    let prediction = engine
        .predict(&features)
        .map_err(|err| ApiError::Inference(err.to_string()))?;

    let status = UsageStatus::classify(prediction, request.lag_24h);
    debug!(prediction, status = status.as_str(), "prediction served");

    Ok(Json(PredictResponse {
        prediction: round2(prediction),
        status: status.as_str(),
        message: status.message(),
    }))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Accept a JSON number or a string holding one.
fn flexible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid number: {s:?}"))),
    }
}
