//! Engine configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tidy_naming::StrategyConfig;

/// Engine tunables
///
/// Loadable from TOML or JSON; missing keys take their defaults.
///
/// ```toml
/// batch_size = 100
/// cache_ttl_ms = 5000
/// variant_suffix_limit = 50
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Top-level nodes processed between yields
    pub batch_size: usize,
    /// Main-component cache lifetime in milliseconds
    pub cache_ttl_ms: u64,
    /// Maximum characters of an instance's variant list
    pub variant_suffix_limit: usize,
}

impl EngineConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With batch size
    #[inline]
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// With cache lifetime
    #[inline]
    #[must_use]
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// With variant list limit
    #[inline]
    #[must_use]
    pub fn with_variant_suffix_limit(mut self, limit: usize) -> Self {
        self.variant_suffix_limit = limit;
        self
    }

    /// Main-component cache lifetime
    #[inline]
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }

    /// Tunables handed to the built-in strategies
    #[must_use]
    pub fn strategy_config(&self) -> StrategyConfig {
        StrategyConfig {
            cache_ttl_ms: self.cache_ttl_ms,
            variant_suffix_limit: self.variant_suffix_limit,
        }
    }

    /// Check value ranges
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] for a zero batch size or a zero
    /// variant limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::Invalid("batch_size must be at least 1".into()));
        }
        if self.variant_suffix_limit == 0 {
            return Err(ConfigError::Invalid(
                "variant_suffix_limit must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate TOML
    ///
    /// # Errors
    /// Syntax, shape or range errors.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate JSON
    ///
    /// # Errors
    /// Syntax, shape or range errors.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.toml` or `.json` file
    ///
    /// # Errors
    /// I/O, unsupported extension, syntax, shape or range errors.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&text),
            Some("json") => Self::from_json_str(&text),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        let strategy = StrategyConfig::default();
        Self {
            batch_size: 100,
            cache_ttl_ms: strategy.cache_ttl_ms,
            variant_suffix_limit: strategy.variant_suffix_limit,
        }
    }
}
