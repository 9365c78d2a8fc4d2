//! Error types for gomarket
//!
//! All modules use `GomarketResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gomarket operations
pub type GomarketResult<T> = Result<T, GomarketError>;

/// All errors that can occur in gomarket
#[derive(Error, Debug)]
pub enum GomarketError {
    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown configuration key: {0}")]
    ConfigKeyUnknown(String),

    // Cart errors
    #[error("use_cart must be used within a CartProvider")]
    NotProvided,

    #[error("Cart writer has shut down; no further changes can be persisted")]
    WriterClosed,

    // Storage errors
    #[error("Storage error for key {key}: {reason}")]
    Storage { key: String, reason: String },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    User(String),
}

impl GomarketError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a storage error for a key
    pub fn storage(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Storage {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ConfigInvalid { .. } => Some("Run: gomarket config init --force"),
            Self::ConfigKeyUnknown(_) => Some("Run: gomarket config show"),
            Self::NotProvided => Some("Mount a CartStore on the provider before using the cart"),
            Self::Storage { .. } | Self::Io { .. } => {
                Some("Check that the data directory is writable (--data-dir)")
            }
            _ => None,
        }
    }
}
