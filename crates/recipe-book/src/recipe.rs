//! Recipe - named entity with validated numeric fields
//!
//! Provides [`Recipe`] and the shared [`RecipeHandle`] stored by a
//! [`RecipeBook`](crate::RecipeBook).

use crate::error::RecipeError;
use crate::quantity::{check_quantity, parse_quantity, RecipeField};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A named drink recipe
///
/// Identity is the name alone: two recipes with the same name are equal and
/// hash identically no matter what their quantities are. Two recipes that
/// have never been named are also equal.
///
/// # Example
/// ```
/// use recipe_book::Recipe;
///
/// let mut recipe = Recipe::with_name("Mocha");
/// recipe.set_amt_coffee("3").unwrap();
/// assert_eq!(recipe.amt_coffee(), 3);
/// assert!(recipe.set_amt_milk("-1").is_err());
/// assert_eq!(recipe.amt_milk(), 0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "RawRecipe")]
pub struct Recipe {
    name: Option<String>,
    price: u32,
    amt_coffee: u32,
    amt_milk: u32,
    amt_sugar: u32,
    amt_chocolate: u32,
}

impl Recipe {
    /// Create an unnamed recipe with every quantity at zero
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recipe with the given name
    #[inline]
    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Current name, if one was ever set
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Replace the name; `None` keeps the current one
    pub fn set_name(&mut self, name: Option<&str>) {
        if let Some(name) = name {
            self.name = Some(name.to_string());
        }
    }

    /// Price
    #[inline]
    #[must_use]
    pub fn price(&self) -> u32 {
        self.price
    }

    /// Units of coffee
    #[inline]
    #[must_use]
    pub fn amt_coffee(&self) -> u32 {
        self.amt_coffee
    }

    /// Units of milk
    #[inline]
    #[must_use]
    pub fn amt_milk(&self) -> u32 {
        self.amt_milk
    }

    /// Units of sugar
    #[inline]
    #[must_use]
    pub fn amt_sugar(&self) -> u32 {
        self.amt_sugar
    }

    /// Units of chocolate
    #[inline]
    #[must_use]
    pub fn amt_chocolate(&self) -> u32 {
        self.amt_chocolate
    }

    /// Set the price from text
    ///
    /// # Errors
    /// Returns [`RecipeError`] if `input` is not a non-negative integer; the
    /// price is left unchanged.
    pub fn set_price(&mut self, input: &str) -> Result<(), RecipeError> {
        self.set_field(RecipeField::Price, input)
    }

    /// Set the coffee amount from text
    ///
    /// # Errors
    /// See [`Recipe::set_price`].
    pub fn set_amt_coffee(&mut self, input: &str) -> Result<(), RecipeError> {
        self.set_field(RecipeField::Coffee, input)
    }

    /// Set the milk amount from text
    ///
    /// # Errors
    /// See [`Recipe::set_price`].
    pub fn set_amt_milk(&mut self, input: &str) -> Result<(), RecipeError> {
        self.set_field(RecipeField::Milk, input)
    }

    /// Set the sugar amount from text
    ///
    /// # Errors
    /// See [`Recipe::set_price`].
    pub fn set_amt_sugar(&mut self, input: &str) -> Result<(), RecipeError> {
        self.set_field(RecipeField::Sugar, input)
    }

    /// Set the chocolate amount from text
    ///
    /// # Errors
    /// See [`Recipe::set_price`].
    pub fn set_amt_chocolate(&mut self, input: &str) -> Result<(), RecipeError> {
        self.set_field(RecipeField::Chocolate, input)
    }

    /// Set any numeric field from text
    ///
    /// The input is parsed before anything is written, so a rejected value
    /// leaves the recipe untouched.
    ///
    /// # Errors
    /// Returns [`RecipeError`] if `input` is not a non-negative integer.
    pub fn set_field(&mut self, field: RecipeField, input: &str) -> Result<(), RecipeError> {
        let value = parse_quantity(field, input)?;
        *self.slot_mut(field) = value;
        Ok(())
    }

    /// Read any numeric field
    #[must_use]
    pub fn field(&self, field: RecipeField) -> u32 {
        match field {
            RecipeField::Price => self.price,
            RecipeField::Coffee => self.amt_coffee,
            RecipeField::Milk => self.amt_milk,
            RecipeField::Sugar => self.amt_sugar,
            RecipeField::Chocolate => self.amt_chocolate,
        }
    }

    fn slot_mut(&mut self, field: RecipeField) -> &mut u32 {
        match field {
            RecipeField::Price => &mut self.price,
            RecipeField::Coffee => &mut self.amt_coffee,
            RecipeField::Milk => &mut self.amt_milk,
            RecipeField::Sugar => &mut self.amt_sugar,
            RecipeField::Chocolate => &mut self.amt_chocolate,
        }
    }

    /// Wrap into a shared handle
    #[inline]
    #[must_use]
    pub fn into_handle(self) -> RecipeHandle {
        RecipeHandle::new(self)
    }
}

/// Unchecked wire form; numeric fields go through the setter range rules
#[derive(Default, Deserialize)]
#[serde(default)]
struct RawRecipe {
    name: Option<String>,
    price: i64,
    amt_coffee: i64,
    amt_milk: i64,
    amt_sugar: i64,
    amt_chocolate: i64,
}

impl TryFrom<RawRecipe> for Recipe {
    type Error = RecipeError;

    fn try_from(raw: RawRecipe) -> Result<Self, Self::Error> {
        Ok(Self {
            name: raw.name,
            price: check_quantity(RecipeField::Price, raw.price)?,
            amt_coffee: check_quantity(RecipeField::Coffee, raw.amt_coffee)?,
            amt_milk: check_quantity(RecipeField::Milk, raw.amt_milk)?,
            amt_sugar: check_quantity(RecipeField::Sugar, raw.amt_sugar)?,
            amt_chocolate: check_quantity(RecipeField::Chocolate, raw.amt_chocolate)?,
        })
    }
}

impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Recipe {}

impl Hash for Recipe {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Display for Recipe {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or_default())
    }
}

/// Shared, mutable reference to a [`Recipe`]
///
/// Cloning a handle clones the reference, not the recipe. A book slot and
/// the caller that added the recipe see the same object, so changes made
/// through one handle are visible through every other.
///
/// Equality and hashing follow the referenced recipe's name. Renaming a
/// recipe while it sits in a book can leave two slots with equal names; the
/// book does not detect this.
///
/// Holding a [`write`](Self::write) guard while handing the same handle to a
/// book operation deadlocks.
#[derive(Debug, Clone, Default)]
pub struct RecipeHandle {
    inner: Arc<RwLock<Recipe>>,
}

impl RecipeHandle {
    /// Wrap a recipe
    #[inline]
    #[must_use]
    pub fn new(recipe: Recipe) -> Self {
        Self {
            inner: Arc::new(RwLock::new(recipe)),
        }
    }

    /// Shared read access
    #[inline]
    pub fn read(&self) -> RwLockReadGuard<'_, Recipe> {
        self.inner.read()
    }

    /// Exclusive write access
    #[inline]
    pub fn write(&self) -> RwLockWriteGuard<'_, Recipe> {
        self.inner.write()
    }

    /// Owned copy of the current name
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.read().name().map(str::to_string)
    }

    /// Check if both handles point at the same recipe object
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Copy of the referenced recipe as it is now
    #[must_use]
    pub fn snapshot(&self) -> Recipe {
        self.read().clone()
    }
}

impl From<Recipe> for RecipeHandle {
    fn from(recipe: Recipe) -> Self {
        Self::new(recipe)
    }
}

impl PartialEq for RecipeHandle {
    fn eq(&self, other: &Self) -> bool {
        // Same object: skip locking it twice
        self.ptr_eq(other) || *self.read() == *other.read()
    }
}

impl Eq for RecipeHandle {}

impl Hash for RecipeHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.read().hash(state);
    }
}

impl Display for RecipeHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.read(), f)
    }
}
