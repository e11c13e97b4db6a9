//! Test fixture modules.
//!
//! - `build` - Champion build records
//! - `catalog` - Item catalog documents for matcher and command tests

pub mod build;
pub mod catalog;
