use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Settings shared by every service binary: listening port and log plumbing.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP collector endpoint. Span export is disabled when unset.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

/// Build a settings value from, in increasing precedence: `.env`, an optional
/// `configuration.*` file in the working directory, `APP_*` environment
/// variables (`__` separates nested keys) and finally a bare `PORT`.
pub fn load_layered<T: DeserializeOwned>() -> Result<T, AppError> {
    dotenvy::dotenv().ok();

    let port_override = match std::env::var("PORT") {
        Ok(raw) => Some(raw.trim().parse::<i64>().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("PORT must be a number, got {:?}: {}", raw, e))
        })?),
        Err(_) => None,
    };

    let config = Cfg::builder()
        .add_source(File::with_name("configuration").required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option("port", port_override)?
        .build()?;

    Ok(config.try_deserialize()?)
}
