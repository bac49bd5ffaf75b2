use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

/// Sources for the localized error-message catalog
///
/// Built-in defaults are overlaid by the bundle at `path`, then by `entries`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessagesConfig {
    /// TOML bundle of `code = "text"` pairs
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub entries: HashMap<String, String>,
}
