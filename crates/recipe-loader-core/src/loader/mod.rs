// crates/recipe-loader-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression), delegates decoding to
//! [`crate::raw`], and hands the finished batch to a [`RecipeStore`].
//!
//! A run is one straight pass:
//!
//! 1. ensure the table exists,
//! 2. read and parse the source,
//! 3. null out `NaN` values and decode the nine recognized fields,
//! 4. insert every recipe in a single transaction.
//!
//! Nothing is retried. If any step fails the error is returned and the
//! store holds no rows from this run.

use crate::common::LoadReport;
use crate::error::Result;
use crate::model::Recipe;
use crate::raw::parse_records;
use crate::store::RecipeStore;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod common_io;

pub use common_io::{open_stream, read_source};

/// Source file used when no input is given.
pub const DEFAULT_INPUT: &str = "US_recipes_null.json";

/// Database file used when no database is given.
pub const DEFAULT_DATABASE: &str = "recipes.db";

/// Loads one source file into a store.
#[derive(Debug, Clone)]
pub struct Loader {
    input: PathBuf,
}

impl Loader {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
        }
    }

    pub fn default_input_path() -> PathBuf {
        PathBuf::from(DEFAULT_INPUT)
    }

    /// Reads and decodes the source without touching any store.
    pub fn read_recipes(&self) -> Result<(Vec<Recipe>, usize)> {
        let text = read_source(&self.input)?;
        debug!(path = %self.input.display(), bytes = text.len(), "source read");

        let parsed = parse_records(&text)?;
        info!(
            records = parsed.records.len(),
            nan_replaced = parsed.nan_replaced,
            "source decoded"
        );

        let recipes = parsed.records.into_iter().map(Recipe::from).collect();
        Ok((recipes, parsed.nan_replaced))
    }

    /// Runs the full load against `store` and commits once.
    pub fn load<S: RecipeStore + ?Sized>(&self, store: &mut S) -> Result<LoadReport> {
        store.ensure_schema()?;

        let (recipes, nan_replaced) = self.read_recipes()?;
        let inserted = store.insert_batch(&recipes)?;
        info!(rows = inserted, "batch committed");

        Ok(LoadReport {
            records: recipes.len(),
            nan_replaced,
            inserted,
        })
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new(Self::default_input_path())
    }
}

/// Shorthand for `Loader::new(input).load(store)`.
pub fn load<S: RecipeStore + ?Sized>(input: impl AsRef<Path>, store: &mut S) -> Result<LoadReport> {
    Loader::new(input.as_ref()).load(store)
}
