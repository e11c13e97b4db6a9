//! Data access layer repositories.
//!
//! Repositories are thin wrappers over SeaORM queries. They take already validated and
//! normalized values; validation, timeouts and error classification live in the service
//! layer.

pub mod build;
