// crates/recipe-loader-core/src/model.rs
use crate::raw::RecipeRaw;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nutrient name -> amount, in source order (e.g. `"calories": "389 kcal"`).
pub type Nutrients = IndexMap<String, serde_json::Value>;

/// Portion information. Sources write either free text (`"8 servings"`) or
/// a bare number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Serves {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Serves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Serves::Number(n) => write!(f, "{n}"),
            Serves::Text(s) => f.write_str(s),
        }
    }
}

/// A recipe as persisted in the `recipes` table.
///
/// Every attribute is nullable; identity is assigned by the store on insert
/// and only appears on [`StoredRecipe`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub cuisine: Option<String>,
    pub title: Option<String>,
    pub rating: Option<f64>,
    /// Minutes.
    pub prep_time: Option<f64>,
    /// Minutes.
    pub cook_time: Option<f64>,
    /// Minutes.
    pub total_time: Option<f64>,
    pub description: Option<String>,
    pub nutrients: Option<Nutrients>,
    pub serves: Option<Serves>,
}

/// A row read back from the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredRecipe {
    pub id: i64,
    #[serde(flatten)]
    pub recipe: Recipe,
}

impl From<RecipeRaw> for Recipe {
    fn from(raw: RecipeRaw) -> Self {
        Recipe {
            cuisine: raw.cuisine,
            title: raw.title,
            rating: raw.rating,
            prep_time: raw.prep_time,
            cook_time: raw.cook_time,
            total_time: raw.total_time,
            description: raw.description,
            nutrients: raw.nutrients,
            serves: raw.serves,
        }
    }
}
