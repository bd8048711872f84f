//! recipe-loader-cli
//! =================
//!
//! Command-line interface for the `recipe-loader-core` crate.
//!
//! Basic usage:
//!
//! ```text
//! recipe-loader                      # load US_recipes_null.json into recipes.db
//! recipe-loader -i data.json.gz -d out.db load
//! recipe-loader -d out.db stats
//! ```
//!
//! Logging goes to stderr and honours `RUST_LOG` (default `info`).
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use recipe_loader_core::{Loader, RecipeStore, SqliteStore};
use tracing::info;

/// Executes the parsed command line.
pub fn run(args: CliArgs) -> anyhow::Result<()> {
    let mut store = SqliteStore::open(&args.database)
        .with_context(|| format!("opening database {}", args.database.display()))?;

    match args.command.unwrap_or(Commands::Load) {
        Commands::Load => {
            info!(
                input = %args.input.display(),
                database = %store.url(),
                "loading recipes"
            );
            let report = Loader::new(&args.input)
                .load(&mut store)
                .with_context(|| format!("loading {}", args.input.display()))?;
            println!("{report}");
        }

        Commands::Stats => {
            store.ensure_schema().context("creating recipes table")?;
            let count = store.count().context("counting recipes")?;
            println!("Database statistics:");
            println!("  Recipes: {count}");
        }
    }

    Ok(())
}
