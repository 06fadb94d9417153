mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

/// Loads configuration from the YAML file named by `CONFIG_PATH`
/// (default `config.yaml`), then applies environment overrides.
///
/// A missing file is not an error: every field has a default, matching
/// the env-only configuration of the deployed service.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let mut config: Config = match tokio::fs::read_to_string(&config_path).await {
        Ok(config_str) => serde_yaml::from_str(&config_str)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", config_path);
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    if let Ok(api_key) = env::var("GEMINI_API_KEY") {
        config.gemini.api_key = api_key;
    }

    if let Ok(port) = env::var("PORT") {
        config.server.port = port
            .parse()
            .map_err(|_| crate::Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }

    Ok(config)
}
