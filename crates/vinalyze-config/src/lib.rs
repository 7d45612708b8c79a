//! Configuration system for the Vinalyze client.
//!
//! Load the prediction endpoint from TOML or YAML files, or from the
//! environment at deploy time, without code changes. The endpoint is the
//! only required knob: without one, submission short-circuits with a
//! configuration error instead of attempting a network call.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use vinalyze_config::ClientConfig;
//!
//! let config = ClientConfig::from_toml_str(r#"
//!     endpoint = "http://localhost:8000/quality/"
//! "#).unwrap();
//!
//! assert_eq!(config.endpoint(), Some("http://localhost:8000/quality/"));
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use vinalyze_config::ClientConfig;
//!
//! let config = ClientConfig::load("vinalyze.toml").unwrap_or_default();
//! // Proceeds unconfigured if the file doesn't exist.
//! assert!(config.endpoint().is_none());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding the configured endpoint at deploy time.
pub const ENDPOINT_ENV: &str = "VINALYZE_ENDPOINT";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main client configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ClientConfig {
    /// URL of the external prediction service.
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl ClientConfig {
    /// Creates a new default (unconfigured) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Builds a configuration from the environment alone.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Applies environment overrides on top of this configuration.
    ///
    /// A blank [`ENDPOINT_ENV`] value counts as unset and leaves the
    /// configured endpoint untouched.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                self.endpoint = Some(endpoint);
            }
        }
        self
    }

    /// Sets the prediction endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Returns the configured endpoint, treating blank values as unset.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }

    /// Returns whether an endpoint is configured.
    pub fn is_configured(&self) -> bool {
        self.endpoint().is_some()
    }

    /// Checks that the configured endpoint, if any, is an http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(endpoint) = self.endpoint() {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ConfigError::Invalid(format!(
                    "endpoint must be an http(s) URL, got {endpoint:?}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_toml_parsing() {
        let toml = r#"
            endpoint = "https://wine.example.com/quality/"
        "#;

        let config = ClientConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.endpoint(), Some("https://wine.example.com/quality/"));
        assert!(config.is_configured());
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = "endpoint: https://wine.example.com/quality/\n";

        let config = ClientConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.endpoint(), Some("https://wine.example.com/quality/"));
    }

    #[test]
    fn test_empty_config_is_unconfigured() {
        let config = ClientConfig::from_toml_str("").unwrap();
        assert_eq!(config.endpoint(), None);
        assert!(!config.is_configured());
    }

    #[test]
    fn test_blank_endpoint_counts_as_unset() {
        let config = ClientConfig::new().with_endpoint("   ");
        assert_eq!(config.endpoint(), None);
        assert!(!config.is_configured());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint = \"http://localhost:8000/quality/\"").unwrap();

        let config = ClientConfig::load(file.path()).unwrap();
        assert_eq!(config.endpoint(), Some("http://localhost:8000/quality/"));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config = ClientConfig::load("definitely-not-here.toml").unwrap_or_default();
        assert!(!config.is_configured());
    }

    #[test]
    fn test_validate_rejects_non_http_endpoint() {
        let config = ClientConfig::new().with_endpoint("ftp://wine.example.com");
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = ClientConfig::new().with_endpoint("http://wine.example.com");
        assert!(config.validate().is_ok());

        // Unconfigured is not invalid; it surfaces later as a submit error.
        assert!(ClientConfig::new().validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        // Scoped to a variable name no other test uses.
        std::env::set_var(ENDPOINT_ENV, "http://env.example.com/quality/");
        let config = ClientConfig::new()
            .with_endpoint("http://file.example.com/quality/")
            .with_env_overrides();
        std::env::remove_var(ENDPOINT_ENV);

        assert_eq!(config.endpoint(), Some("http://env.example.com/quality/"));
    }
}
