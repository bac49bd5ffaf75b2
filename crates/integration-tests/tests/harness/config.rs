//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::PathBuf;

use idp_config::{Config, ServerConfig, Surface, SurfaceRule};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: SocketAddr::from(([127, 0, 0, 1], 0)),
                    ..ServerConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Add an inline message override
    pub fn with_message(mut self, code: &str, text: &str) -> Self {
        self.config.messages.entries.insert(code.to_owned(), text.to_owned());
        self
    }

    /// Load messages from a bundle on disk
    pub fn with_message_bundle(mut self, path: PathBuf) -> Self {
        self.config.messages.path = Some(path);
        self
    }

    /// Replace the classification rules
    pub fn with_rules(mut self, rules: Vec<SurfaceRule>, default: Surface) -> Self {
        self.config.dispatch.rules = rules;
        self.config.dispatch.default = default;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
