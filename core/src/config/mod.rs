use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CACHE_CAPACITY: usize = 50;
pub const MAX_CACHE_CAPACITY: usize = 10_000;
pub const DEFAULT_PLACEHOLDER: &str = "Search...";

/// Typeahead widget configuration, persisted as typeahead.toml.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeaheadConfig {
    /// Upper bound on cached query results. Zero disables caching.
    pub cache_capacity: usize,
    /// Display-only hint shown in an empty input.
    pub placeholder: String,
    pub case_sensitive: bool,
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            case_sensitive: false,
        }
    }
}

impl TypeaheadConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> PathBuf {
        dir.join("typeahead.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file missing, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.cache_capacity > MAX_CACHE_CAPACITY {
            errors.push(format!(
                "cache_capacity must be at most {MAX_CACHE_CAPACITY}"
            ));
        }

        if self.placeholder.trim().is_empty() {
            errors.push("placeholder must not be blank".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            cache_capacity: if self.cache_capacity > MAX_CACHE_CAPACITY {
                defaults.cache_capacity
            } else {
                self.cache_capacity
            },
            placeholder: if self.placeholder.trim().is_empty() {
                defaults.placeholder
            } else {
                self.placeholder.clone()
            },
            case_sensitive: self.case_sensitive,
        }
    }
}
