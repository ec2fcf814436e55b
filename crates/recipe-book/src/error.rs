//! Error types for recipe entities and the recipe book
//!
//! Only invalid operations are errors:
//! - Numeric field text that does not parse or is negative
//! - Adding an absent recipe
//! - Slot indices outside the book's capacity
//!
//! Duplicate names and a full book are ordinary outcomes and are reported
//! through return values instead.

use crate::config::MAX_CAPACITY;
use crate::quantity::RecipeField;

/// Validation failure raised by a [`Recipe`](crate::Recipe) setter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecipeError {
    /// Input is not an integer
    #[error("{field} must be an integer, got {input:?}")]
    NotAnInteger {
        /// Field being set
        field: RecipeField,
        /// Rejected input text
        input: String,
    },

    /// Input parsed but is below zero
    #[error("{field} must be a non-negative integer, got {value}")]
    Negative {
        /// Field being set
        field: RecipeField,
        /// Parsed negative value
        value: i64,
    },
}

impl RecipeError {
    /// Field the rejected input was meant for
    #[inline]
    #[must_use]
    pub fn field(&self) -> RecipeField {
        match self {
            Self::NotAnInteger { field, .. } | Self::Negative { field, .. } => *field,
        }
    }
}

/// Invalid [`RecipeBook`](crate::RecipeBook) operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookError {
    /// `add_recipe` was given no recipe
    #[error("cannot add an absent recipe")]
    NullRecipe,

    /// Slot index outside `[0, capacity)`
    #[error("slot index {index} out of range for capacity {capacity}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of slots in the book
        capacity: usize,
    },
}

impl BookError {
    /// Check if the error is a bounds failure
    #[inline]
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if the error is an absent-recipe failure
    #[inline]
    #[must_use]
    pub fn is_null_recipe(&self) -> bool {
        matches!(self, Self::NullRecipe)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Capacity outside `1..=MAX_CAPACITY`
    #[error("recipe book capacity must be between 1 and {max}, got {0}", max = MAX_CAPACITY)]
    InvalidCapacity(usize),

    /// TOML input could not be decoded
    #[error("invalid recipe book config: {0}")]
    Parse(#[from] toml::de::Error),
}
