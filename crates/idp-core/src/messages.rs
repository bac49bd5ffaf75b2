use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error_codes;

/// Resolves an error code to display text
///
/// Implementations must return some text for every code, including ones
/// they have never heard of.
pub trait MessageResolver: Send + Sync {
    fn resolve(&self, code: &str) -> String;
}

/// Errors raised while building a [`MessageCatalog`]
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read message bundle {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse message bundle: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Immutable code-to-text table
///
/// Starts from built-in English defaults; bundles and inline entries
/// overlay them. Unknown codes resolve to the code itself.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    /// Catalog holding only the built-in defaults
    pub fn builtin() -> Self {
        let messages = error_codes::ALL
            .iter()
            .map(|code| ((*code).to_string(), default_message(code).to_string()))
            .collect();

        Self { messages }
    }

    /// Overlay entries from a TOML bundle of `code = "text"` pairs
    ///
    /// # Errors
    ///
    /// Returns an error if the bundle is not a flat table of strings
    pub fn with_toml(mut self, bundle: &str) -> Result<Self, CatalogError> {
        let entries: HashMap<String, String> = toml::from_str(bundle)?;
        self.messages.extend(entries);
        Ok(self)
    }

    /// Overlay entries from a TOML bundle on disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn with_file(self, path: &Path) -> Result<Self, CatalogError> {
        let bundle = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loading message bundle");
        self.with_toml(&bundle)
    }

    /// Overlay individual entries
    #[must_use]
    pub fn with_entries<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.messages
            .extend(entries.into_iter().map(|(code, text)| (code.into(), text.into())));
        self
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MessageResolver for MessageCatalog {
    fn resolve(&self, code: &str) -> String {
        self.messages.get(code).cloned().unwrap_or_else(|| code.to_string())
    }
}

fn default_message(code: &str) -> &'static str {
    match code {
        error_codes::INVALID_REQUEST => "Invalid request",
        error_codes::INVALID_INPUT => "Invalid input",
        error_codes::INVALID_CLIENT_ID => "Invalid client id",
        error_codes::INVALID_REDIRECT_URI => "Invalid redirect URI",
        error_codes::INVALID_TRANSACTION => "Invalid transaction",
        error_codes::INVALID_AUTH_TOKEN => "Invalid or missing auth token",
        _ => "Unknown error occurred",
    }
}
