//! HTTP server configuration

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Server configuration
///
/// # Environment Variables
/// - `SERVER_HOST`: Bind address (default: "0.0.0.0")
/// - `SERVER_PORT`: Bind port (default: 5000)
/// - `SERVER_CORS_ALLOW_ANY_ORIGIN`: Accept cross-origin browser requests (default: true)
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_allow_any_origin: bool,
}

impl ServerConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 5000)?
            .set_default("cors_allow_any_origin", true)?
            .add_source(Environment::with_prefix("SERVER").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        unsafe {
            std::env::remove_var("SERVER_HOST");
            std::env::remove_var("SERVER_PORT");
            std::env::remove_var("SERVER_CORS_ALLOW_ANY_ORIGIN");
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_without_environment() {
        clear_env();

        let config = ServerConfig::load().unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
        assert!(config.cors_allow_any_origin);
    }

    #[test]
    #[serial]
    fn environment_overrides_defaults() {
        clear_env();
        unsafe {
            std::env::set_var("SERVER_HOST", "127.0.0.1");
            std::env::set_var("SERVER_PORT", "8080");
            std::env::set_var("SERVER_CORS_ALLOW_ANY_ORIGIN", "false");
        }

        let config = ServerConfig::load().unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert!(!config.cors_allow_any_origin);

        clear_env();
    }

    #[test]
    #[serial]
    fn invalid_port_is_an_error() {
        clear_env();
        unsafe {
            std::env::set_var("SERVER_PORT", "not-a-port");
        }

        assert!(ServerConfig::load().is_err());

        clear_env();
    }
}
