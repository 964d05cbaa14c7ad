//! Error types for Tidy Core
//!
//! - [`ConfigError`]: engine configuration loading and validation
//! - [`EngineError`]: engine construction
//! - [`SettingsError`]: settings persistence
//! - [`SessionError`]: plugin session event handling
//!
//! A rename run itself never fails; per-node problems are logged and counted
//! in the [`RenameReport`](crate::RenameReport).

use std::path::PathBuf;
use tidy_naming::NamingError;

/// Engine configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or shape error
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax or shape error
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is neither `.toml` nor `.json`
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(PathBuf),

    /// Value out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Engine construction errors
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration rejected
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Classifier could not be built
    #[error("naming setup failed: {0}")]
    Naming(#[from] NamingError),
}

/// Settings persistence errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Storage I/O failed
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Stored blob is not valid
    #[error("settings are malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Plugin session errors
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A rename is already running
    #[error("a rename is already in progress")]
    Busy,

    /// Settings could not be loaded or saved
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Engine could not be built
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

impl SessionError {
    /// Check if the event can simply be sent again later
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Busy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_busy_is_retryable() {
        assert!(SessionError::Busy.is_retryable());

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let settings = SessionError::from(SettingsError::from(io));
        assert!(!settings.is_retryable());
        assert!(settings.to_string().contains("read-only"));
    }
}
