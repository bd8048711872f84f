// crates/recipe-loader-core/src/raw.rs

//! Raw input structures as they come from the source JSON.
//!
//! The document is decoded in two steps: the top level into
//! [`RecipeSource`], then every entry into a [`RecipeRaw`]. Splitting the
//! steps lets a type error name the record that caused it.

use crate::error::{RecipeError, Result};
use crate::model::{Nutrients, Serves};
use crate::normalize::null_nan_literals;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Raw recipe record.
///
/// Only the nine recognized keys are kept; anything else in the source
/// object is dropped during decoding. Absent keys and `null` both become
/// `None`.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct RecipeRaw {
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub prep_time: Option<f64>,
    #[serde(default)]
    pub cook_time: Option<f64>,
    #[serde(default)]
    pub total_time: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub nutrients: Option<Nutrients>,
    #[serde(default)]
    pub serves: Option<Serves>,
}

/// Top-level shape of the source document.
///
/// Exporters write either an object keyed by some row id
/// (`{"0": {...}, "1": {...}}`) or a plain array. Both collapse into one
/// ordered sequence; the keys carry no meaning beyond error messages.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RecipeSource {
    Keyed(IndexMap<String, Value>),
    Listed(Vec<Value>),
}

impl RecipeSource {
    /// Entries in document order. Array entries are keyed by their index.
    pub fn into_entries(self) -> Vec<(String, Value)> {
        match self {
            RecipeSource::Keyed(map) => map.into_iter().collect(),
            RecipeSource::Listed(list) => list
                .into_iter()
                .enumerate()
                .map(|(i, v)| (format!("[{i}]"), v))
                .collect(),
        }
    }

    /// Decodes every entry into a [`RecipeRaw`], failing on the first
    /// record with a mistyped field.
    pub fn into_records(self) -> Result<Vec<RecipeRaw>> {
        self.into_entries()
            .into_iter()
            .map(|(key, value)| {
                serde_json::from_value(value)
                    .map_err(|source| RecipeError::InvalidRecord { key, source })
            })
            .collect()
    }
}

/// A decoded document.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedSource {
    pub records: Vec<RecipeRaw>,
    /// `NaN` literals rewritten to `null` before decoding.
    pub nan_replaced: usize,
}

/// Normalizes and decodes an in-memory source document.
pub fn parse_records(text: &str) -> Result<ParsedSource> {
    let normalized = null_nan_literals(text);
    let source: RecipeSource = serde_json::from_str(&normalized.text)?;
    let records = source.into_records()?;
    Ok(ParsedSource {
        records,
        nan_replaced: normalized.replaced,
    })
}
