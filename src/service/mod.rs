//! Service layer for business logic.
//!
//! Services validate and normalize caller input, bound every storage call with the
//! configured timeout and translate repository results into domain models.

pub mod build;
