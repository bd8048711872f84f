// crates/recipe-loader-core/src/store/mod.rs

//! # Storage
//!
//! The loader talks to the database only through [`RecipeStore`]. The
//! handle is passed in explicitly; nothing in this crate keeps a
//! process-wide connection.

use crate::error::Result;
use crate::model::{Recipe, StoredRecipe};

mod sqlite;
mod value;

pub use sqlite::SqliteStore;

/// Name of the table recipes are written to.
pub const RECIPES_TABLE: &str = "recipes";

/// A relational store that can hold recipes.
pub trait RecipeStore {
    /// Creates the recipes table if it is missing. Safe to call on an
    /// initialized store.
    fn ensure_schema(&mut self) -> Result<()>;

    /// Inserts every recipe inside a single transaction and returns the
    /// number of rows written.
    ///
    /// All-or-nothing: if any insert or the commit fails, no row from this
    /// batch remains.
    fn insert_batch(&mut self, recipes: &[Recipe]) -> Result<usize>;

    /// Number of rows currently in the table.
    fn count(&self) -> Result<usize>;

    /// All rows, ordered by id.
    fn fetch_all(&self) -> Result<Vec<StoredRecipe>>;
}
