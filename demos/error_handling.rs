//! Error handling example for recipe-loader-rs
//!
//! This example demonstrates the failure modes of a load and shows that a
//! failed run never leaves partial rows behind.

use recipe_loader_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== recipe-loader Error Handling Example ===\n");

    let mut store = SqliteStore::in_memory()?;
    let dir = std::env::temp_dir();

    // Example 1: Missing source file
    println!("--- Example 1: Missing source file ---");
    match load(dir.join("does-not-exist.json"), &mut store) {
        Ok(report) => println!("  Unexpected success: {report}"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 2: Malformed JSON
    println!("--- Example 2: Malformed JSON ---");
    let broken = dir.join("recipe-loader-broken.json");
    std::fs::write(&broken, r#"[{"title": "Half a recipe""#)?;
    match load(&broken, &mut store) {
        Ok(report) => println!("  Unexpected success: {report}"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 3: A record with a mistyped field
    println!("--- Example 3: Mistyped field ---");
    let mistyped = dir.join("recipe-loader-mistyped.json");
    std::fs::write(
        &mistyped,
        r#"{"ok": {"title": "Fine"}, "bad": {"title": "Broken", "rating": "five stars"}}"#,
    )?;
    match load(&mistyped, &mut store) {
        Ok(report) => println!("  Unexpected success: {report}"),
        Err(RecipeError::InvalidRecord { key, source }) => {
            println!("  ✗ record {key:?} rejected: {source}")
        }
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // None of the failed runs committed anything.
    println!("Rows after failed runs: {}", store.count()?);

    std::fs::remove_file(&broken)?;
    std::fs::remove_file(&mistyped)?;
    Ok(())
}
