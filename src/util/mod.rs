//! Utility functions shared by the service layer.

pub mod timeout;
