//! Error types for window manager operations and configuration loading.

use std::path::PathBuf;

use crate::WindowId;

/// Errors returned by the window manager.
///
/// These describe caller mistakes rather than transient failures; no
/// operation leaves the manager partially updated when it fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A window that isn't managed by this window manager was passed in.
    #[error("invalid argument to {operation}: window 0x{window:X} is not managed by this window manager")]
    InvalidArgument {
        operation: &'static str,
        window: WindowId,
    },
}

/// Errors raised while reading `config.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Returns true if the config file simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Result type alias for window manager operations.
pub type Result<T> = std::result::Result<T, Error>;
