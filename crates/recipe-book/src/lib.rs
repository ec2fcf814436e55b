//! Recipe Book
//!
//! Validated recipe entities and a fixed-capacity, name-unique recipe book.
//!
//! # Overview
//!
//! - **Recipe**: a name plus price and four ingredient amounts, each set from
//!   text and validated as a non-negative integer
//! - **RecipeHandle**: shared reference to a recipe, stored by the book
//! - **RecipeBook**: index-addressed slots (4 by default) with add, delete,
//!   edit and list operations
//!
//! Recipes are identified by name. Equality and hashing ignore every other
//! field, and the book uses that equality to refuse duplicates.
//!
//! # Example
//!
//! ```rust
//! use recipe_book::{Recipe, RecipeBook};
//!
//! let mut mocha = Recipe::with_name("Mocha");
//! mocha.set_price("50").unwrap();
//! mocha.set_amt_chocolate("2").unwrap();
//!
//! let mut book = RecipeBook::new();
//! assert!(book.add_recipe(Some(mocha.into_handle())).unwrap());
//!
//! let recipes = book.recipes();
//! assert_eq!(recipes.len(), 4);
//! assert_eq!(recipes[0].as_ref().unwrap().read().price(), 50);
//! ```

#![warn(missing_docs)]

pub mod book;
pub mod config;
pub mod error;
pub mod quantity;
pub mod recipe;

// Re-exports
pub use book::RecipeBook;
pub use config::{RecipeBookConfig, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use error::{BookError, ConfigError, RecipeError};
pub use quantity::{check_quantity, parse_quantity, RecipeField};
pub use recipe::{Recipe, RecipeHandle};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for recipe book operations
    pub use crate::{
        BookError, Recipe, RecipeBook, RecipeBookConfig, RecipeError, RecipeField, RecipeHandle,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
