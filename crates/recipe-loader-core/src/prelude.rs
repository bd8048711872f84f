// crates/recipe-loader-core/src/prelude.rs
pub use crate::common::LoadReport;
pub use crate::error::{RecipeError, Result};
pub use crate::loader::{load, Loader};
pub use crate::model::{Nutrients, Recipe, Serves, StoredRecipe};
pub use crate::store::{RecipeStore, SqliteStore};
