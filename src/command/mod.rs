//! Chat command layer.
//!
//! Parses `!`-prefixed chat messages, resolves item phrases through the matcher, calls the
//! build service and renders replies. Transport is left to the caller: a handler takes an
//! author and a message and returns the reply text.

pub mod handler;
pub mod parse;
pub mod render;
pub mod segment;

pub use handler::CommandHandler;
pub use parse::Command;
