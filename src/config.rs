use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_UPSTREAM: &str = "https://api-public.prod.furnishedfinder.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    NotANumber { name: &'static str, value: String },

    #[error("invalid listen address {0:?}")]
    Address(String),
}

/// Server settings, read from the environment (and a `.env` file if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: String,
    pub static_root: PathBuf,
    pub graphql_upstream: String,
    pub max_workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            database_path: "properties.db".to_string(),
            static_root: PathBuf::from("public"),
            graphql_upstream: DEFAULT_UPSTREAM.to_string(),
            max_workers: 8,
        }
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::NotANumber { name, value })
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = parse_number("PORT", port)?;
        }
        if let Some(path) = lookup("DATABASE_PATH") {
            config.database_path = path;
        }
        if let Some(root) = lookup("STATIC_ROOT") {
            config.static_root = PathBuf::from(root);
        }
        if let Some(upstream) = lookup("GRAPHQL_UPSTREAM") {
            config.graphql_upstream = upstream.trim_end_matches('/').to_string();
        }
        if let Some(workers) = lookup("MAX_WORKERS") {
            config.max_workers = parse_number("MAX_WORKERS", workers)?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::Address(addr))
    }
}
