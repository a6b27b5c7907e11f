//! Server settings read from the environment.

use std::env;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_FILE: &str = "tournaments.json";

/// Where the web binary listens and where it keeps its data.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl ServerConfig {
    /// Read HOST, PORT and DATA_FILE; anything unset or unparsable keeps its default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();
        if let Some(host) = value("HOST") {
            config.host = host;
        }
        if let Some(port) = value("PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => log::warn!("Ignoring invalid PORT {:?}, using {}", port, config.port),
            }
        }
        if let Some(path) = value("DATA_FILE") {
            config.data_file = PathBuf::from(path);
        }
        config
    }
}
