//! Server configuration.
//!
//! Settings are loaded from (in priority order):
//! 1. Environment variables (`NEOGATE__` prefix, `__` separator)
//! 2. Config file (`neogate.toml` by default)
//! 3. Defaults

use serde::Deserialize;

use neogate_graph::GraphConfig;

/// Listener settings, from the `[server]` section or `NEOGATE__SERVER__*`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (default: "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,

    /// Listening port (default: 5000).
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Everything the server binary needs at startup.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub server: ServerConfig,
    pub neo4j: GraphConfig,
}

/// Load settings, falling back to defaults for anything unset.
pub fn load(file_prefix: &str) -> Settings {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("NEOGATE")
                .separator("__")
                .try_parsing(true),
        )
        .build();

    match cfg {
        Ok(c) => Settings {
            server: c.get::<ServerConfig>("server").unwrap_or_default(),
            neo4j: GraphConfig {
                uri: c
                    .get_string("neo4j.uri")
                    .unwrap_or_else(|_| "bolt://localhost:7687".to_string()),
                user: c
                    .get_string("neo4j.user")
                    .unwrap_or_else(|_| "neo4j".to_string()),
                password: c
                    .get_string("neo4j.password")
                    .unwrap_or_else(|_| "password".to_string()),
                ..Default::default()
            },
        },
        Err(_) => Settings::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = load("no-such-config-file");
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.neo4j.uri, "bolt://localhost:7687");
        assert_eq!(settings.neo4j.user, "neo4j");
    }
}
