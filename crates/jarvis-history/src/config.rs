//! History configuration
//!
//! The only tunable is the undo-stack capacity. A TOML document or the
//! defaults supply the base value; `JARVIS_HISTORY_CAPACITY` overrides it
//! once `with_env_overrides` is applied.

use serde::{Deserialize, Serialize};

use crate::errors::{JarvisError, Result};

/// Environment variable overriding the undo-stack capacity
pub const ENV_HISTORY_CAPACITY: &str = "JARVIS_HISTORY_CAPACITY";

/// Capacity used when none is configured
pub const DEFAULT_CAPACITY: usize = 50;

/// Configuration for the history ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of undoable commands retained; oldest evicted first
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    history: Option<HistoryConfig>,
    #[serde(flatten)]
    top_level: HistoryConfig,
}

impl HistoryConfig {
    /// Create a config with an explicit capacity
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let config = Self { capacity };
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document
    ///
    /// Accepts either a `[history]` table or a top-level `capacity` key; the
    /// table wins when both are present.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for malformed TOML or a zero capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use jarvis_history::HistoryConfig;
    ///
    /// let config = HistoryConfig::from_toml_str("[history]\ncapacity = 10").unwrap();
    /// assert_eq!(config.capacity, 10);
    /// ```
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(input)?;
        let config = file.history.unwrap_or(file.top_level);
        config.validate()?;
        Ok(config)
    }

    /// Build a config from the environment, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `JARVIS_HISTORY_CAPACITY` is set but is
    /// not a positive integer.
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply environment overrides on top of this config
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `JARVIS_HISTORY_CAPACITY` is set but is
    /// not a positive integer.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_HISTORY_CAPACITY) {
            self.capacity = raw
                .trim()
                .parse()
                .map_err(|_| JarvisError::InvalidConfig {
                    reason: format!(
                        "{} must be a positive integer, got '{}'",
                        ENV_HISTORY_CAPACITY, raw
                    ),
                })?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check the config for values the ledger cannot honour
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `capacity` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(JarvisError::InvalidConfig {
                reason: "capacity must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity() {
        assert_eq!(HistoryConfig::default().capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn test_from_toml_table() {
        let config = HistoryConfig::from_toml_str("[history]\ncapacity = 7\n").unwrap();
        assert_eq!(config.capacity, 7);
    }

    #[test]
    fn test_from_toml_top_level() {
        let config = HistoryConfig::from_toml_str("capacity = 3").unwrap();
        assert_eq!(config.capacity, 3);
    }

    #[test]
    fn test_from_toml_empty_uses_default() {
        let config = HistoryConfig::from_toml_str("").unwrap();
        assert_eq!(config, HistoryConfig::default());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result = HistoryConfig::from_toml_str("[history]\ncapacity = 0");
        assert!(matches!(result, Err(JarvisError::InvalidConfig { .. })));
        assert!(HistoryConfig::with_capacity(0).is_err());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = HistoryConfig::from_toml_str("[history\ncapacity = 2");
        assert!(matches!(result, Err(JarvisError::InvalidConfig { .. })));
    }

    #[test]
    fn test_env_override_applied() {
        let config = HistoryConfig::default()
            .with_overrides_from(|key| (key == ENV_HISTORY_CAPACITY).then(|| " 12 ".to_string()))
            .unwrap();
        assert_eq!(config.capacity, 12);
    }

    #[test]
    fn test_env_override_absent_keeps_value() {
        let config = HistoryConfig::with_capacity(4)
            .unwrap()
            .with_overrides_from(|_| None)
            .unwrap();
        assert_eq!(config.capacity, 4);
    }

    #[test]
    fn test_env_override_garbage_rejected() {
        let result = HistoryConfig::default().with_overrides_from(|_| Some("lots".to_string()));
        assert!(matches!(result, Err(JarvisError::InvalidConfig { .. })));
    }
}
