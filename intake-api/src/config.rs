//! Server configuration, loaded from environment variables.

use std::env;

use tracing::warn;

/// Runtime configuration for the HTTP server. All fields have defaults, so
/// the server starts with no environment at all.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub log_file: String,
}

impl ServerConfig {
    /// Loads config from the environment. An explicit `port` (e.g. from the
    /// CLI) overrides `PORT`.
    pub fn load(port: Option<u16>) -> Self {
        let port = port
            .or_else(|| env::var("PORT").ok().and_then(|p| parse_port(&p)))
            .unwrap_or(8080);
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:./intake.db".to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/intake-api.log".to_string());

        Self {
            port,
            database_url,
            log_file,
        }
    }
}

fn parse_port(raw: &str) -> Option<u16> {
    match raw.parse() {
        Ok(port) => Some(port),
        Err(e) => {
            warn!("Invalid PORT value {raw}: {e}; falling back to default");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("PORT");
        env::remove_var("DATABASE_URL");
        env::remove_var("LOG_FILE");
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        clear_env();
        let config = ServerConfig::load(None);
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url, "sqlite:./intake.db");
        assert_eq!(config.log_file, "logs/intake-api.log");
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var("PORT", "9000");
        env::set_var("DATABASE_URL", "sqlite::memory:");
        let config = ServerConfig::load(None);
        assert_eq!(config.port, 9000);
        assert_eq!(config.database_url, "sqlite::memory:");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_explicit_port_wins() {
        clear_env();
        env::set_var("PORT", "9000");
        let config = ServerConfig::load(Some(3000));
        assert_eq!(config.port, 3000);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_falls_back() {
        clear_env();
        env::set_var("PORT", "not-a-port");
        let config = ServerConfig::load(None);
        assert_eq!(config.port, 8080);
        clear_env();
    }
}
