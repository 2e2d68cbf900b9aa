use std::{env, net::SocketAddr};

use thiserror::Error;

mod defaults {
    pub const API_HOST: &str = "0.0.0.0";
    pub const API_PORT: &str = "8080";
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid API_PORT: `{0}`")]
    InvalidPort(String),

    #[error("Invalid listen address: `{0}`")]
    InvalidAddress(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// IP literal to bind
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load from `API_HOST` / `API_PORT`, reading a `.env` file first if present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(env::var("API_HOST").ok(), env::var("API_PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let host = host.unwrap_or_else(|| defaults::API_HOST.to_string());
        let port = port.unwrap_or_else(|| defaults::API_PORT.to_string());

        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port))?;

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(None, None).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides() {
        let config =
            Config::from_vars(Some("127.0.0.1".to_string()), Some("3000".to_string())).unwrap();

        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_vars(None, Some("eighty".to_string())).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidPort(p) if p == "eighty"));
    }

    #[test]
    fn test_invalid_host() {
        let config = Config::from_vars(Some("localhost".to_string()), None).unwrap();

        assert!(matches!(
            config.socket_addr(),
            Err(ConfigError::InvalidAddress(_))
        ));
    }
}
