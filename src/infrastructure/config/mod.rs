use crate::domain::app_config::AppConfig;
use crate::domain::error::{AppError, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::path::PathBuf;
use validator::Validate;

const CONFIG_FILE: &str = "restoscope.toml";
const CONFIG_PATH_VAR: &str = "RESTOSCOPE_CONFIG";
const ENV_PREFIX: &str = "RESTOSCOPE_";
/// Overrides the browser binary regardless of any other source.
const BROWSER_PATH_VAR: &str = "BROWSER_PATH";

pub struct ConfigService;

impl ConfigService {
    /// Defaults, then the TOML file, then `RESTOSCOPE_*` variables.
    pub fn load() -> Result<AppConfig> {
        let _ = dotenvy::dotenv();

        let file = std::env::var(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(CONFIG_FILE));

        let figment = Self::base()
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX));

        let mut config = Self::extract(figment)?;
        if let Ok(path) = std::env::var(BROWSER_PATH_VAR) {
            if !path.trim().is_empty() {
                config.browser_path = path;
            }
        }
        config
            .validate()
            .map_err(|e| AppError::ConfigError(format!("Invalid configuration: {}", e)))?;
        Ok(config)
    }

    pub fn base() -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
    }

    pub fn extract(figment: Figment) -> Result<AppConfig> {
        let config: AppConfig = figment
            .extract()
            .map_err(|e| AppError::ConfigError(format!("Failed to load configuration: {}", e)))?;
        config
            .validate()
            .map_err(|e| AppError::ConfigError(format!("Invalid configuration: {}", e)))?;
        Ok(config)
    }
}
