//! recipe-loader-rs
//!
//! Convenience facade over [`recipe_loader_core`]; hosts the demos.
pub use recipe_loader_core::*;
