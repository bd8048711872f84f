//! recipe-loader — Command-line interface for recipe-loader-core
//!
//! Reads a JSON file of recipe records, replaces `NaN` and missing values
//! with NULL, and writes every record to the `recipes` table of a SQLite
//! database in a single transaction.
//!
//! Usage examples
//! --------------
//!
//! - Load the default file (`US_recipes_null.json`) into `recipes.db`
//!   $ recipe-loader
//!
//! - Load a custom (optionally gzipped) file into a custom database
//!   $ recipe-loader --input data/recipes.json.gz --database out.db load
//!
//! - Count the rows already loaded
//!   $ recipe-loader --database out.db stats
//!
//! Running `load` twice appends the records twice; there is no dedup.
use clap::Parser;
use recipe_loader_cli::{args::CliArgs, run};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    run(CliArgs::parse())
}
