/// Structured error types for dashctl-core.
///
/// Library crates get `thiserror` enums; the `dashctl` binary wraps them
/// with `anyhow` context at the edges.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dashctl-core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Reading a config file failed
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid TOML or has the wrong shape
    #[error("Invalid config file {path:?}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Config file explicitly requested but missing
    #[error("Config not found at {path:?}")]
    ConfigNotFound { path: PathBuf },

    /// Config value could not be applied
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for dashctl-core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Create an I/O error tied to a path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::config("DASHCTL_DB_PORT must be a port number");
        assert_eq!(
            err.to_string(),
            "Configuration error: DASHCTL_DB_PORT must be a port number"
        );

        let err = CoreError::ConfigNotFound {
            path: PathBuf::from("/tmp/dashctl.toml"),
        };
        assert!(err.to_string().contains("/tmp/dashctl.toml"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = CoreError::io("/etc/dashctl.toml", io_err);

        assert!(matches!(err, CoreError::Io { .. }));
        assert!(err.to_string().contains("/etc/dashctl.toml"));
    }
}
