//! Testing utilities for the recipe book workspace
//!
//! Shared fixtures and tracing setup.

#![allow(missing_docs)]

use recipe_book::{Recipe, RecipeBook, RecipeHandle};
use std::sync::{Arc, Mutex};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{EnvFilter, Layer};

/// Drink names used to fill a default book
pub const HOUSE_MENU: [&str; 4] = ["Espresso", "Latte", "Cappuccino", "Americano"];

/// Install a test subscriber honouring `RUST_LOG`; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn named_recipe(name: &str) -> RecipeHandle {
    Recipe::with_name(name).into_handle()
}

/// Recipe with every numeric field set from text
pub fn complete_recipe(
    name: &str,
    price: &str,
    coffee: &str,
    milk: &str,
    sugar: &str,
    chocolate: &str,
) -> Recipe {
    let mut recipe = Recipe::with_name(name);
    recipe.set_price(price).unwrap();
    recipe.set_amt_coffee(coffee).unwrap();
    recipe.set_amt_milk(milk).unwrap();
    recipe.set_amt_sugar(sugar).unwrap();
    recipe.set_amt_chocolate(chocolate).unwrap();
    recipe
}

/// Default book with every slot holding a [`HOUSE_MENU`] recipe, in order
pub fn full_book() -> RecipeBook {
    let mut book = RecipeBook::new();
    for name in HOUSE_MENU {
        assert!(book.add_recipe(Some(named_recipe(name))).unwrap());
    }
    book
}

/// Names currently in the book, `None` for empty slots
pub fn slot_names(book: &RecipeBook) -> Vec<Option<String>> {
    book.recipes()
        .into_iter()
        .map(|slot| slot.and_then(|recipe| recipe.name()))
        .collect()
}

/// Layer recording the level of every event it sees
#[derive(Debug, Clone, Default)]
pub struct LevelRecorder {
    levels: Arc<Mutex<Vec<Level>>>,
}

impl LevelRecorder {
    pub fn levels(&self) -> Vec<Level> {
        self.levels.lock().unwrap().clone()
    }
}

impl<S: Subscriber> Layer<S> for LevelRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.levels.lock().unwrap().push(*event.metadata().level());
    }
}

/// Run `f` with a thread-local subscriber and return the event levels it emitted
pub fn capture_levels<R>(f: impl FnOnce() -> R) -> (R, Vec<Level>) {
    let recorder = LevelRecorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, recorder.levels())
}
