//! SDK configuration
//!
//! Base URLs for the identity and banking services plus the few knobs the
//! client exposes. Defaults point at a local gateway.

use serde::{Deserialize, Serialize};
use ssobank_types::DEFAULT_HISTORY_LIMIT;
use std::time::Duration;
use thiserror::Error;

pub const AUTH_URL_ENV: &str = "SSOBANK_AUTH_URL";
pub const BANKING_URL_ENV: &str = "SSOBANK_BANKING_URL";
pub const TIMEOUT_ENV: &str = "SSOBANK_TIMEOUT";
pub const HISTORY_LIMIT_ENV: &str = "SSOBANK_HISTORY_LIMIT";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_DESCRIPTION: &str = "Bank Transfer";

/// Configuration problems
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnv { var: &'static str, reason: String },

    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Identity service base URL (`/login`, `/signup`)
    pub auth_base_url: String,
    /// Banking service base URL (`/accounts/*`, `/transfers*`)
    pub banking_base_url: String,
    /// Request timeout; `None` leaves the transport default in place
    #[serde(with = "humantime_serde")]
    pub timeout: Option<Duration>,
    /// Description attached to every transfer
    pub transfer_description: String,
    /// History entries kept in an account view
    pub history_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auth_base_url: DEFAULT_BASE_URL.to_string(),
            banking_base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            transfer_description: DEFAULT_DESCRIPTION.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl ClientConfig {
    /// Both services behind one gateway
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            auth_base_url: base_url.to_string(),
            banking_base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(AUTH_URL_ENV) {
            config.auth_base_url = url;
        }
        if let Ok(url) = std::env::var(BANKING_URL_ENV) {
            config.banking_base_url = url;
        }
        if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
            let timeout = humantime_serde::re::humantime::parse_duration(raw.trim()).map_err(
                |e| ConfigError::InvalidEnv {
                    var: TIMEOUT_ENV,
                    reason: e.to_string(),
                },
            )?;
            config.timeout = Some(timeout);
        }
        if let Ok(raw) = std::env::var(HISTORY_LIMIT_ENV) {
            config.history_limit =
                raw.trim()
                    .parse()
                    .map_err(|e: std::num::ParseIntError| ConfigError::InvalidEnv {
                        var: HISTORY_LIMIT_ENV,
                        reason: e.to_string(),
                    })?;
        }

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for (name, url) in [
            ("auth_base_url", &self.auth_base_url),
            ("banking_base_url", &self.banking_base_url),
        ] {
            match reqwest::Url::parse(url) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                Ok(parsed) => errors.push(format!(
                    "{} must use http or https, got {}",
                    name,
                    parsed.scheme()
                )),
                Err(e) => errors.push(format!("{} is not a valid URL: {}", name, e)),
            }
        }

        if self.history_limit == 0 {
            errors.push("history_limit must be at least 1".to_string());
        }
        if self.transfer_description.trim().is_empty() {
            errors.push("transfer_description must not be empty".to_string());
        }
        if self.timeout == Some(Duration::ZERO) {
            errors.push("timeout must be greater than zero".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate, folding problems into a single error
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate().map_err(ConfigError::Invalid)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.auth_base_url, "http://localhost:8000");
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.transfer_description, "Bank Transfer");
        assert_eq!(config.timeout, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_rejects_bad_values() {
        let config = ClientConfig {
            auth_base_url: "localhost".to_string(),
            banking_base_url: "ftp://bank".to_string(),
            history_limit: 0,
            transfer_description: " ".to_string(),
            timeout: Some(Duration::ZERO),
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_config_from_json_with_humantime() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"banking_base_url":"https://bank.example","timeout":"15s"}"#,
        )
        .unwrap();
        assert_eq!(config.banking_base_url, "https://bank.example");
        assert_eq!(config.auth_base_url, "http://localhost:8000");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_validated_folds_errors() {
        let config = ClientConfig {
            history_limit: 0,
            ..Default::default()
        };
        assert!(matches!(config.validated(), Err(ConfigError::Invalid(e)) if e.len() == 1));
    }
}
