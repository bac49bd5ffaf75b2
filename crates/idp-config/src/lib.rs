#![allow(clippy::must_use_candidate)]

pub mod dispatch;
mod env;
pub mod logging;
mod loader;
pub mod messages;
pub mod server;

use serde::Deserialize;

pub use dispatch::*;
pub use env::EnvError;
pub use logging::*;
pub use messages::*;
pub use server::*;

/// Top-level identity provider configuration
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Listener and built-in routes
    #[serde(default)]
    pub server: ServerConfig,
    /// Localized error messages
    #[serde(default)]
    pub messages: MessagesConfig,
    /// Path-to-surface classification
    #[serde(default)]
    pub dispatch: DispatchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
