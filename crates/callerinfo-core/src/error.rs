//! Error taxonomy for the settings layer.
//!
//! Two levels:
//!
//! - [`StoreError`] – raised by a key-value namespace when it cannot persist
//!   or reload its content.
//! - [`SettingsError`] – raised by the settings facade.  Wraps `StoreError`
//!   and adds the two failures the facade itself can produce.
//!
//! A missing key is never an error: every read resolves through the
//! per-field default policy instead.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for key-value namespace operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing preferences at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The persisted TOML content could not be parsed.
    #[error("failed to parse preferences TOML: {0}")]
    Parse(String),

    /// The namespace could not be serialized for persistence.
    #[error("failed to serialize preferences: {0}")]
    Serialize(String),

    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,
}

/// Error type for the settings facade.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The process-wide store was accessed before `init` ran.
    #[error("settings are not initialized")]
    NotInitialized,

    /// The stored padding-mark blob is not a JSON array of strings.
    #[error("failed to decode padding-mark list: {0}")]
    Decode(#[from] serde_json::Error),

    /// The underlying namespace rejected a write or commit.
    #[error(transparent)]
    Store(#[from] StoreError),
}
