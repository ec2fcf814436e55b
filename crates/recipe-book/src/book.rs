//! Fixed-capacity recipe book
//!
//! Provides [`RecipeBook`], a set of index-addressed slots that each hold at
//! most one recipe. Slots never move: deleting a recipe leaves a hole that
//! the next add fills.

use crate::config::RecipeBookConfig;
use crate::error::{BookError, ConfigError};
use crate::recipe::RecipeHandle;

/// Name-unique, fixed-capacity recipe store
///
/// # Slot lifecycle
/// - `EMPTY --add--> OCCUPIED`
/// - `OCCUPIED --delete--> EMPTY`
/// - `OCCUPIED --edit--> OCCUPIED` (content replaced)
/// - `EMPTY --edit--> EMPTY` (no-op)
///
/// Out-of-range indices are errors. A full book, a duplicate name or an
/// empty slot are reported through return values.
///
/// Mutation needs `&mut self`; the book does no locking of its own.
///
/// # Example
/// ```
/// use recipe_book::{Recipe, RecipeBook};
///
/// let mut book = RecipeBook::new();
/// let latte = Recipe::with_name("Latte").into_handle();
///
/// assert!(book.add_recipe(Some(latte.clone())).unwrap());
/// assert!(!book.add_recipe(Some(latte)).unwrap());
/// assert_eq!(book.delete_recipe(0).unwrap().as_deref(), Some("Latte"));
/// assert_eq!(book.delete_recipe(0).unwrap(), None);
/// ```
#[derive(Debug, Clone)]
pub struct RecipeBook {
    slots: Box<[Option<RecipeHandle>]>,
}

impl RecipeBook {
    /// Create an empty book with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_slots(RecipeBookConfig::default().capacity)
    }

    /// Create an empty book from configuration
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the configuration does not validate.
    pub fn with_config(config: &RecipeBookConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_slots(config.capacity))
    }

    fn with_slots(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
        }
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check if no slot is occupied
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Check if every slot is occupied
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Add a recipe to the lowest free slot
    ///
    /// # Returns
    /// - `Ok(true)` if the recipe was stored
    /// - `Ok(false)` if a stored recipe has the same name or the book is full
    ///
    /// # Errors
    /// Returns [`BookError::NullRecipe`] if `recipe` is `None`.
    pub fn add_recipe(&mut self, recipe: Option<RecipeHandle>) -> Result<bool, BookError> {
        let Some(recipe) = recipe else {
            tracing::debug!("Rejected absent recipe");
            return Err(BookError::NullRecipe);
        };

        if self.slots.iter().flatten().any(|stored| *stored == recipe) {
            tracing::debug!("Recipe '{}' already in book", recipe);
            return Ok(false);
        }

        let Some((index, slot)) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| slot.is_none())
        else {
            tracing::debug!("Recipe book full, cannot add '{}'", recipe);
            return Ok(false);
        };

        tracing::debug!("Added recipe '{}' at slot {}", recipe, index);
        *slot = Some(recipe);
        Ok(true)
    }

    /// Clear a slot
    ///
    /// Returns the name of the recipe that was removed, or `None` if the slot
    /// was already empty. A recipe that was never named yields an empty
    /// string.
    ///
    /// # Errors
    /// Returns [`BookError::IndexOutOfRange`] if `index >= capacity`.
    pub fn delete_recipe(&mut self, index: usize) -> Result<Option<String>, BookError> {
        let slot = self.slot_mut(index)?;
        let removed = slot.take().map(|old| old.name().unwrap_or_default());

        if let Some(name) = &removed {
            tracing::debug!("Deleted recipe '{}' from slot {}", name, index);
        }
        Ok(removed)
    }

    /// Replace the recipe in an occupied slot
    ///
    /// `recipe` is stored as given. No uniqueness check is made against the
    /// other slots.
    ///
    /// Returns the name of the replaced recipe, or `None` (without storing
    /// anything) if the slot was empty.
    ///
    /// # Errors
    /// Returns [`BookError::IndexOutOfRange`] if `index >= capacity`.
    pub fn edit_recipe(
        &mut self,
        index: usize,
        recipe: RecipeHandle,
    ) -> Result<Option<String>, BookError> {
        let slot = self.slot_mut(index)?;
        let Some(old) = slot.as_mut() else {
            return Ok(None);
        };

        let replaced = std::mem::replace(old, recipe);
        let name = replaced.name().unwrap_or_default();
        tracing::debug!("Replaced recipe '{}' at slot {}", name, index);
        Ok(Some(name))
    }

    /// Snapshot of every slot in index order
    ///
    /// The returned vector always has `capacity()` entries. Entries share the
    /// stored recipes; later changes to the book do not alter it.
    #[must_use]
    pub fn recipes(&self) -> Vec<Option<RecipeHandle>> {
        self.slots.to_vec()
    }

    /// Recipe in a single slot
    ///
    /// # Errors
    /// Returns [`BookError::IndexOutOfRange`] if `index >= capacity`.
    pub fn get(&self, index: usize) -> Result<Option<&RecipeHandle>, BookError> {
        self.slots
            .get(index)
            .map(Option::as_ref)
            .ok_or(BookError::IndexOutOfRange {
                index,
                capacity: self.capacity(),
            })
    }

    /// Index of the first slot holding a recipe with this name
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|slot| {
            slot.as_ref()
                .is_some_and(|recipe| recipe.read().name() == Some(name))
        })
    }

    /// Iterate over occupied slots as `(index, recipe)`
    pub fn iter(&self) -> impl Iterator<Item = (usize, &RecipeHandle)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|recipe| (index, recipe)))
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut Option<RecipeHandle>, BookError> {
        let capacity = self.capacity();
        self.slots.get_mut(index).ok_or_else(|| {
            tracing::debug!("Slot index {} out of range for capacity {}", index, capacity);
            BookError::IndexOutOfRange { index, capacity }
        })
    }
}

impl Default for RecipeBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Recipe;

    fn handle(name: &str) -> RecipeHandle {
        Recipe::with_name(name).into_handle()
    }

    #[test]
    fn new_book_is_empty() {
        let book = RecipeBook::new();

        assert_eq!(book.capacity(), 4);
        assert_eq!(book.len(), 0);
        assert!(book.is_empty());
        assert!(!book.is_full());
    }

    #[test]
    fn add_fills_lowest_free_slot() {
        let mut book = RecipeBook::new();
        for name in ["A", "B", "C"] {
            assert!(book.add_recipe(Some(handle(name))).unwrap());
        }

        book.delete_recipe(1).unwrap();
        assert!(book.add_recipe(Some(handle("D"))).unwrap());

        assert_eq!(book.position_of("D"), Some(1));
        assert_eq!(book.position_of("C"), Some(2));
    }

    #[test]
    fn add_absent_recipe_fails() {
        let mut book = RecipeBook::new();
        let result = book.add_recipe(None);

        assert_eq!(result, Err(BookError::NullRecipe));
        assert!(book.is_empty());
    }

    #[test]
    fn add_same_handle_twice() {
        let mut book = RecipeBook::new();
        let mocha = handle("Mocha");

        assert!(book.add_recipe(Some(mocha.clone())).unwrap());
        assert!(!book.add_recipe(Some(mocha)).unwrap());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn full_book_rejects_add() {
        let mut book = RecipeBook::new();
        for i in 1..=4 {
            assert!(book.add_recipe(Some(handle(&format!("Recipe{i}")))).unwrap());
        }

        assert!(book.is_full());
        assert!(!book.add_recipe(Some(handle("Overflow"))).unwrap());
        assert_eq!(book.position_of("Overflow"), None);
    }

    #[test]
    fn delete_out_of_range() {
        let mut book = RecipeBook::new();
        let err = book.delete_recipe(4).unwrap_err();

        assert_eq!(
            err,
            BookError::IndexOutOfRange {
                index: 4,
                capacity: 4
            }
        );
    }

    #[test]
    fn delete_unnamed_recipe_yields_empty_name() {
        let mut book = RecipeBook::new();
        book.add_recipe(Some(RecipeHandle::default())).unwrap();

        assert_eq!(book.delete_recipe(0).unwrap(), Some(String::new()));
        assert_eq!(book.delete_recipe(0).unwrap(), None);
    }

    #[test]
    fn edit_empty_slot_is_noop() {
        let mut book = RecipeBook::new();

        assert_eq!(book.edit_recipe(1, handle("Vanilla")).unwrap(), None);
        assert!(book.is_empty());
    }

    #[test]
    fn edit_stores_new_recipe_unchanged() {
        let mut book = RecipeBook::new();
        book.add_recipe(Some(handle("Cappuccino"))).unwrap();
        let replacement = handle("NewCappuccino");

        let old = book.edit_recipe(0, replacement.clone()).unwrap();

        assert_eq!(old.as_deref(), Some("Cappuccino"));
        let stored = book.get(0).unwrap().unwrap();
        assert!(stored.ptr_eq(&replacement));
        assert_eq!(stored.name().as_deref(), Some("NewCappuccino"));
    }

    #[test]
    fn get_checks_bounds() {
        let book = RecipeBook::new();

        assert!(book.get(3).unwrap().is_none());
        assert!(book.get(4).unwrap_err().is_out_of_range());
    }

    #[test]
    fn iter_skips_holes() {
        let mut book = RecipeBook::new();
        for name in ["A", "B", "C"] {
            book.add_recipe(Some(handle(name))).unwrap();
        }
        book.delete_recipe(1).unwrap();

        let indices: Vec<usize> = book.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn with_config_uses_capacity() {
        let config = RecipeBookConfig::new().with_capacity(2);
        let book = RecipeBook::with_config(&config).unwrap();

        assert_eq!(book.capacity(), 2);
        assert_eq!(book.recipes().len(), 2);
    }

    #[test]
    fn with_config_rejects_zero_capacity() {
        let config = RecipeBookConfig::new().with_capacity(0);
        assert!(RecipeBook::with_config(&config).is_err());
    }

    #[test]
    fn with_config_rejects_oversized_capacity() {
        let config = RecipeBookConfig::new().with_capacity(usize::MAX);
        assert!(matches!(
            RecipeBook::with_config(&config),
            Err(ConfigError::InvalidCapacity(usize::MAX))
        ));
    }
}
