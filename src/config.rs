// Configuration module
// Layers an optional config.toml under environment overrides.

use serde::Deserialize;
use std::net::SocketAddr;

use crate::lookup::LookupClient;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    pub routes: RoutesConfig,
}

/// Listener configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// External validation API
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Full URL of the plate validation endpoint
    pub endpoint: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format ("common" or "json")
    pub access_log_format: String,
    #[serde(default)]
    pub access_log_file: Option<String>,
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub enable_cors: bool,
    pub max_body_size: u64,
}

/// Static asset routing
#[derive(Debug, Deserialize, Clone)]
pub struct RoutesConfig {
    /// Directory served for asset paths
    pub static_dir: String,
    /// Entry document served for the root path
    pub index_file: String,
    /// Path of the lookup endpoint the page posts to
    pub lookup_path: String,
}

impl Config {
    /// Load configuration from `config.toml` (optional) and the environment.
    ///
    /// `PORT` selects the listening port; any other key can be
    /// overridden with a `PLACAS_`-prefixed variable.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("PLACAS").separator("__"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("upstream.endpoint", "http://127.0.0.1:5000/api/validate-plate")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "plate-lookup/0.1")?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 65_536)?
            .set_default("routes.static_dir", "static")?
            .set_default("routes.index_file", "index.html")?
            .set_default("routes.lookup_path", "/api/validate-plate")?
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Shared application state: immutable config plus the upstream client.
pub struct AppState {
    pub config: Config,
    pub lookup: LookupClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let lookup = LookupClient::new(config.upstream.endpoint.clone());
        Self { config, lookup }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                workers: None,
            },
            upstream: UpstreamConfig {
                endpoint: "http://127.0.0.1:5000/api/validate-plate".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: true,
                access_log_format: "common".to_string(),
                access_log_file: None,
                error_log_file: None,
            },
            performance: PerformanceConfig {
                keep_alive_timeout: 75,
                read_timeout: 30,
                write_timeout: 30,
                max_connections: None,
            },
            http: HttpConfig {
                server_name: "plate-lookup/0.1".to_string(),
                enable_cors: false,
                max_body_size: 65_536,
            },
            routes: RoutesConfig {
                static_dir: "static".to_string(),
                index_file: "index.html".to_string(),
                lookup_path: "/api/validate-plate".to_string(),
            },
        }
    }

    #[test]
    fn test_socket_addr_parses() {
        let config = test_config();
        let addr = config.get_socket_addr().unwrap();
        assert_eq!(addr.port(), 3000);
        assert!(addr.is_ipv4());
    }

    #[test]
    fn test_socket_addr_rejects_bad_host() {
        let mut config = test_config();
        config.server.host = "not a host".to_string();
        assert!(config.get_socket_addr().is_err());
    }
}
