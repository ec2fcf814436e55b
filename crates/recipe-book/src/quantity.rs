//! Numeric recipe fields and their text parsing rules
//!
//! Every numeric field of a recipe is set from text. The text must parse as a
//! 32-bit signed integer and the result must not be negative. Leading and
//! trailing whitespace is not trimmed.

use crate::error::RecipeError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Validated numeric field of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeField {
    /// Sale price
    Price,

    /// Units of coffee
    Coffee,

    /// Units of milk
    Milk,

    /// Units of sugar
    Sugar,

    /// Units of chocolate
    Chocolate,
}

impl RecipeField {
    /// All numeric fields, price first
    pub const ALL: [RecipeField; 5] = [
        Self::Price,
        Self::Coffee,
        Self::Milk,
        Self::Sugar,
        Self::Chocolate,
    ];

    /// Lowercase field name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Coffee => "coffee",
            Self::Milk => "milk",
            Self::Sugar => "sugar",
            Self::Chocolate => "chocolate",
        }
    }

    /// Check if this field is an ingredient amount
    #[inline]
    #[must_use]
    pub fn is_ingredient(self) -> bool {
        !matches!(self, Self::Price)
    }
}

impl Display for RecipeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse field text into a non-negative quantity
///
/// # Errors
/// - [`RecipeError::NotAnInteger`] if `input` is not a 32-bit integer
/// - [`RecipeError::Negative`] if it parses below zero
pub fn parse_quantity(field: RecipeField, input: &str) -> Result<u32, RecipeError> {
    let value: i32 = input.parse().map_err(|_| RecipeError::NotAnInteger {
        field,
        input: input.to_string(),
    })?;

    check_quantity(field, i64::from(value))
}

/// Range-check an already numeric quantity
///
/// Accepts exactly the values [`parse_quantity`] accepts: `0..=i32::MAX`.
///
/// # Errors
/// - [`RecipeError::Negative`] below zero
/// - [`RecipeError::NotAnInteger`] above `i32::MAX`
pub fn check_quantity(field: RecipeField, value: i64) -> Result<u32, RecipeError> {
    if value < 0 {
        return Err(RecipeError::Negative { field, value });
    }
    i32::try_from(value)
        .ok()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| RecipeError::NotAnInteger {
            field,
            input: value.to_string(),
        })
}
