//! Service Configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Server and artifact configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Path to the scaler artifact (JSON)
    pub scaler_path: PathBuf,
    /// Path to the model artifact (JSON)
    pub model_path: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            scaler_path: PathBuf::from("models/scaler.json"),
            model_path: PathBuf::from("models/energy_model.json"),
        }
    }
}

impl ServiceConfig {
    /// Layered load: defaults, then an optional `forecast-service.toml`,
    /// then `ENERGY_*` environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Config::try_from(&ServiceConfig::default())?)
            .add_source(config::File::with_name("forecast-service").required(false))
            .add_source(config::Environment::with_prefix("ENERGY"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ServiceConfig::default();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.scaler_path, PathBuf::from("models/scaler.json"));
        assert_eq!(cfg.model_path, PathBuf::from("models/energy_model.json"));
    }
}
