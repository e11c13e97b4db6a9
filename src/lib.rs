//! Champion build book.
//!
//! Records ordered item builds per champion, resolving free-text item names against an
//! in-memory item catalog. Builds are persisted through sea-orm and deletion is scoped to
//! the author who created them, while lookups are open to everyone.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod command;
pub mod config;
pub mod data;
pub mod error;
pub mod matcher;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
