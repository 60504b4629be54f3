use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl Environment {
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            "test" => Ok(Environment::Test),
            other => Err(ConfigError::InvalidValue {
                field: "ENVIRONMENT".to_string(),
                reason: format!("expected development, production or test, got '{}'", other),
            }),
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Server settings. Every value has a default so the server starts with
/// an empty environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub version: String,
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: PathBuf::from("../frontend/dist"),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: Environment::Development,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't have
    /// to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(host) = lookup("HOST").filter(|v| !v.trim().is_empty()) {
            config.host = host;
        }
        if let Some(port) = lookup("PORT").filter(|v| !v.trim().is_empty()) {
            config.port = port.trim().parse().map_err(|e| ConfigError::InvalidValue {
                field: "PORT".to_string(),
                reason: format!("{}", e),
            })?;
        }
        if let Some(dir) = lookup("STATIC_DIR").filter(|v| !v.trim().is_empty()) {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(version) = lookup("APP_VERSION").filter(|v| !v.trim().is_empty()) {
            config.version = version;
        }
        if let Some(env) = lookup("ENVIRONMENT").filter(|v| !v.trim().is_empty()) {
            config.environment = Environment::parse(&env)?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| ConfigError::InvalidValue {
                field: "HOST".to_string(),
                reason: format!("{}", e),
            })?
            .next()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "HOST".to_string(),
                reason: format!("'{}' did not resolve to an address", self.host),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_with_empty_environment() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("../frontend/dist"));
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("STATIC_DIR", "/srv/site"),
            ("APP_VERSION", "2.3.4"),
            ("ENVIRONMENT", "production"),
        ]))
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.version, "2.3.4");
        assert!(config.environment.is_production());
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn rejects_bad_port() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn rejects_unknown_environment() {
        let err = ServerConfig::from_lookup(lookup_from(&[("ENVIRONMENT", "staging")])).unwrap_err();
        assert!(err.to_string().contains("ENVIRONMENT"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "  "), ("HOST", "")])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "127.0.0.1");
    }
}
