//! HTTP query endpoint configuration.

use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    4000
}

fn default_graphql_path() -> String {
    "/api/graphql".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Path of the single query endpoint. Must start with `/`.
    #[serde(default = "default_graphql_path")]
    pub graphql_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphql_path: default_graphql_path(),
        }
    }
}

impl ServerConfig {
    /// `host:port`, as accepted by `tiny_http::Server::http`.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 4000);
        assert_eq!(config.graphql_path, "/api/graphql");
        assert_eq!(config.bind_addr(), "127.0.0.1:4000");
    }
}
