use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::PriceBook;

const DEFAULT_CONFIG_FILE: &str = "gharseva.toml";
const CONFIG_PATH_VAR: &str = "GHARSEVA_CONFIG";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub pricing: PriceBook,
    pub currency_symbol: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig { bind_address: "0.0.0.0".to_string(), port: 5000 },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
            pricing: PriceBook::default(),
            currency_symbol: "₹".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, overlaid by an optional TOML file, overlaid by
    /// `GHARSEVA_*` environment variables.
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let path = options
            .config_path
            .or_else(|| env::var(CONFIG_PATH_VAR).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if path.exists() {
            let raw = fs::read_to_string(&path)
                .map_err(|source| ConfigError::ReadFile { path: path.clone(), source })?;
            let file: FileConfig = toml::from_str(&raw)
                .map_err(|source| ConfigError::ParseFile { path: path.clone(), source })?;
            config.apply_file(file);
        } else if options.require_file {
            return Err(ConfigError::MissingConfigFile(path));
        }

        config.apply_env_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(server) = file.server {
            if let Some(bind_address) = server.bind_address {
                self.server.bind_address = bind_address;
            }
            if let Some(port) = server.port {
                self.server.port = port;
            }
        }
        if let Some(logging) = file.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
        if let Some(pricing) = file.pricing {
            // Merge over the default table: an operator raising one base
            // price keeps the defaults for every unlisted service.
            self.pricing.base_prices.extend(pricing.base_prices);
        }
        if let Some(symbol) = file.currency_symbol {
            self.currency_symbol = symbol;
        }
    }

    /// Env lookup is injected so tests can override without mutating
    /// process environment.
    pub fn apply_env_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(bind_address) = lookup("GHARSEVA_BIND_ADDRESS") {
            self.server.bind_address = bind_address;
        }
        if let Some(port) = lookup("GHARSEVA_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnvOverride {
                key: "GHARSEVA_PORT".to_string(),
                value: port,
            })?;
        }
        if let Some(level) = lookup("GHARSEVA_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("GHARSEVA_LOG_FORMAT") {
            self.logging.format = match format.as_str() {
                "compact" => LogFormat::Compact,
                "pretty" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidEnvOverride {
                        key: "GHARSEVA_LOG_FORMAT".to_string(),
                        value: format,
                    })
                }
            };
        }
        if let Some(symbol) = lookup("GHARSEVA_CURRENCY") {
            self.currency_symbol = symbol;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    server: Option<FileServerConfig>,
    logging: Option<FileLoggingConfig>,
    pricing: Option<PriceBook>,
    currency_symbol: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileServerConfig {
    bind_address: Option<String>,
    port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
struct FileLoggingConfig {
    level: Option<String>,
    format: Option<LogFormat>,
}
