//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use url::Url;

use crate::config::schema::RelayConfig;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_ENV: &str = "RELAY_CONFIG";

/// Environment variable overriding the listener port.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Port(std::num::ParseIntError),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Port(e) => write!(f, "Invalid {} value: {}", PORT_ENV, e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A single semantic problem found in an otherwise well-formed config.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: RelayConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Resolve configuration the way the process boots: an optional config
/// file named by `RELAY_CONFIG`, then the `PORT` override on top.
pub fn from_env() -> Result<RelayConfig, ConfigError> {
    let mut config = match std::env::var(CONFIG_ENV) {
        Ok(path) => load_config(Path::new(&path))?,
        Err(_) => RelayConfig::default(),
    };

    if let Ok(port) = std::env::var(PORT_ENV) {
        config.listener.port = port.parse().map_err(ConfigError::Port)?;
    }

    Ok(config)
}

/// Semantic checks beyond what serde enforces.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = Url::parse(&config.upstream.base_url) {
        errors.push(ValidationError {
            field: "upstream.base_url",
            message: e.to_string(),
        });
    }

    for (field, value) in [
        ("upstream.api_ver", &config.upstream.api_ver),
        ("upstream.access_token", &config.upstream.access_token),
        ("upstream.device_type", &config.upstream.device_type),
    ] {
        if value.is_empty() {
            errors.push(ValidationError {
                field,
                message: "must not be empty".to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = RelayConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.listener.port, 3001);
        assert_eq!(
            config.upstream.base_url,
            "http://api-manga.crunchyroll.com/cr_start_session"
        );
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let mut config = RelayConfig::default();
        config.upstream.base_url = "not a url".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "upstream.base_url");
    }

    #[test]
    fn rejects_empty_credentials() {
        let mut config = RelayConfig::default();
        config.upstream.access_token = String::new();
        config.upstream.device_type = String::new();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["upstream.access_token", "upstream.device_type"]);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: RelayConfig = toml::from_str("[listener]\nport = 8080\n").unwrap();
        assert_eq!(config.listener.port, 8080);
        assert_eq!(config.listener.bind_address, "0.0.0.0");
        assert_eq!(config.upstream.api_ver, "1.0");
    }
}
