//! Energy Forecast API Server
//!
//! HTTP server exposing the usage prediction endpoint plus the landing page,
//! health, and metrics surfaces.

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod routes;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::predict::{PredictRequest, PredictResponse};

use forecast_model::ForecastEngine;

/// Application state shared across handlers. Built once at startup and
/// immutable afterwards, so no lock is needed.
pub struct AppState {
    /// Loaded inference engine; `None` means the service is degraded and
    /// `/predict` reports an error instead of computing anything.
    pub engine: Option<ForecastEngine>,
    /// Prometheus registry handle, when metrics are installed
    pub metrics: Option<PrometheusHandle>,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(engine: Option<ForecastEngine>, metrics: Option<PrometheusHandle>) -> Self {
        Self {
            engine,
            metrics,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub model_loaded: bool,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/predict", post(routes::predict::predict))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Landing page handler
async fn home_handler() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let model_loaded = state.engine.is_some();
    Json(HealthResponse {
        status: if model_loaded { "ok" } else { "degraded" }.to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        model_loaded,
    })
}

/// Prometheus exposition handler
async fn metrics_handler(State(state): State<Arc<AppState>>) -> String {
    state
        .metrics
        .as_ref()
        .map(PrometheusHandle::render)
        .unwrap_or_default()
}

/// Initialize logging
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Load artifacts and run the server. Missing or malformed artifacts leave
/// the service in degraded mode rather than aborting startup.
pub async fn run_server(config: ServiceConfig) -> anyhow::Result<()> {
    let metrics = PrometheusBuilder::new().install_recorder()?;

    let engine = match ForecastEngine::load(&config.scaler_path, &config.model_path) {
        Ok(engine) => Some(engine),
        Err(err) => {
            warn!(%err, "artifacts unavailable, starting degraded");
            None
        }
    };

    let state = Arc::new(AppState::new(engine, Some(metrics)));
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
