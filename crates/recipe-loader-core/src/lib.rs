// crates/recipe-loader-core/src/lib.rs

//! # recipe-loader-core
//!
//! Reads a JSON document of recipe records, replaces `NaN` and missing
//! values with NULL, and commits every record to a relational table in a
//! single transaction.
//!
//! ```no_run
//! use recipe_loader_core::prelude::*;
//!
//! let mut store = SqliteStore::open("recipes.db")?;
//! let report = Loader::new("US_recipes_null.json").load(&mut store)?;
//! println!("inserted {} recipes", report.inserted);
//! # Ok::<(), recipe_loader_core::RecipeError>(())
//! ```

pub mod common;
pub mod error;
pub mod loader; // The public loader
pub mod model;
pub mod normalize;
pub mod prelude;
// Shared Raw Input (source decoding)
pub mod raw;
pub mod store;

// Re-exports
pub use crate::common::LoadReport;
pub use crate::error::{RecipeError, Result};
pub use crate::loader::{load, Loader};
pub use crate::model::{Nutrients, Recipe, Serves, StoredRecipe};
pub use crate::raw::{parse_records, ParsedSource, RecipeRaw, RecipeSource};
pub use crate::store::{RecipeStore, SqliteStore};
