//! Basic usage example for recipe-loader-rs
//!
//! This example demonstrates how to:
//! - Load a recipe file into an in-memory SQLite store
//! - Read the committed rows back
//! - See how `NaN` and missing values end up as `None`

use recipe_loader_rs::prelude::*;

const SAMPLE: &str = r#"{
  "0": {"cuisine": "Southern Recipes", "title": "Apple Pie", "rating": 4.8,
        "prep_time": 30, "cook_time": 60, "total_time": 90,
        "nutrients": {"calories": "512 kcal"}, "serves": "8"},
  "1": {"cuisine": "Drinks Recipes", "title": "Iced Tea", "rating": NaN,
        "prep_time": 5, "cook_time": NaN, "total_time": 5}
}"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== recipe-loader Basic Usage Example ===\n");

    let path = std::env::temp_dir().join("recipe-loader-basic-demo.json");
    std::fs::write(&path, SAMPLE)?;

    let mut store = SqliteStore::in_memory()?;
    let report = Loader::new(&path).load(&mut store)?;
    println!("✓ {report}\n");

    for row in store.fetch_all()? {
        let r = &row.recipe;
        println!(
            "#{} {} ({})",
            row.id,
            r.title.as_deref().unwrap_or("<untitled>"),
            r.cuisine.as_deref().unwrap_or("<no cuisine>")
        );
        println!("   rating:     {:?}", r.rating);
        println!("   prep/cook:  {:?} / {:?} min", r.prep_time, r.cook_time);
        println!(
            "   serves:     {}",
            r.serves.as_ref().map(ToString::to_string).unwrap_or_default()
        );
    }

    std::fs::remove_file(&path)?;
    Ok(())
}
