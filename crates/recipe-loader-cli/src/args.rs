use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for recipe-loader
#[derive(Debug, Parser)]
#[command(
    name = "recipe-loader",
    version,
    about = "Load recipe JSON into a SQLite table, turning NaN and missing values into NULL"
)]
pub struct CliArgs {
    /// Path to the source JSON (or .json.gz) file
    #[arg(
        short = 'i',
        long = "input",
        env = "RECIPE_LOADER_INPUT",
        default_value = recipe_loader_core::loader::DEFAULT_INPUT,
        global = true
    )]
    pub input: PathBuf,

    /// Path to the SQLite database file (created if missing)
    #[arg(
        short = 'd',
        long = "database",
        env = "RECIPE_LOADER_DATABASE",
        default_value = recipe_loader_core::loader::DEFAULT_DATABASE,
        global = true
    )]
    pub database: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Load the source file into the database (the default)
    Load,

    /// Show how many recipes the database holds
    Stats,
}
