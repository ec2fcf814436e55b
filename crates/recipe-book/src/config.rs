//! Recipe book configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Number of slots in a default recipe book
pub const DEFAULT_CAPACITY: usize = 4;

/// Largest slot count a configuration may request
pub const MAX_CAPACITY: usize = 1024;

/// Recipe book configuration
///
/// ```
/// use recipe_book::RecipeBookConfig;
///
/// let config = RecipeBookConfig::from_toml_str("capacity = 6").unwrap();
/// assert_eq!(config.capacity, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecipeBookConfig {
    /// Number of recipe slots
    pub capacity: usize,
}

impl RecipeBookConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With slot count
    #[inline]
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Check the configuration can build a usable book
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidCapacity`] unless the capacity is in
    /// `1..=MAX_CAPACITY`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_CAPACITY).contains(&self.capacity) {
            return Err(ConfigError::InvalidCapacity(self.capacity));
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    ///
    /// Missing keys take their default values.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::InvalidCapacity`] if validation fails.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for RecipeBookConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
