use std::env;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Base addresses of the two remote collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Api {
    /// Authentication service endpoint, queried with `?action=auth`
    pub auth_url: String,
    /// Device registry root, device ids are appended as path segments
    pub device_registry_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub api: Api,
    pub logger: Logger,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        Config::builder()
            .add_source(File::with_name("configs/default"))
            .add_source(File::with_name(&format!("configs/{run_mode}")).required(false))
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_shape() {
        let raw = serde_json::json!({
            "api": {
                "auth_url": "http://localhost:8080/api/auth",
                "device_registry_url": "http://localhost:8080/api/devices"
            },
            "logger": {"level": "debug"}
        });

        let settings: Settings = serde_json::from_value(raw).unwrap();
        assert_eq!(settings.api.auth_url, "http://localhost:8080/api/auth");
        assert_eq!(settings.logger.level, "debug");
    }
}
