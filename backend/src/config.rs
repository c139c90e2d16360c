//! Server configuration, read from the environment.

use crate::error::ConfigError;
use std::env;

pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Port the web frontend posts to
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Load from `HOST` and `PORT`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup. Unset variables fall back to
    /// defaults; set-but-invalid ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("HOST") {
            Some(host) if host.trim().is_empty() => return Err(ConfigError::EmptyHost),
            Some(host) => host.trim().to_string(),
            None => DEFAULT_HOST.to_string(),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidPort {
                    value: raw.clone(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        log::debug!("[CONFIG] host={} port={}", host, port);
        Ok(Self { host, port })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address(), "127.0.0.1:5000");
    }

    #[test]
    fn test_reads_host_and_port() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("HOST", "0.0.0.0"), ("PORT", " 8080 ")]))
                .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_invalid_port_is_error() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));

        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn test_blank_host_is_error() {
        let err = ServerConfig::from_lookup(lookup_from(&[("HOST", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::EmptyHost);
    }
}
