use thiserror::Error;

/// Item catalog could not be built.
///
/// These are startup failures, a process never runs with an inconsistent catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two entries share the same item id.
    #[error("Duplicate item ID in catalog: {0}")]
    DuplicateId(String),
    /// An entry has an empty id.
    #[error("Catalog entry named {0:?} has an empty ID")]
    EmptyId(String),
    /// An entry has an empty name, or one without any letter or digit.
    #[error("Catalog entry {0} has an empty name")]
    EmptyName(String),
    /// Id contains the character used to join ids in storage.
    #[error("Item ID {0:?} contains the reserved delimiter {1:?}")]
    ReservedDelimiter(String, char),
    /// Catalog file could not be read.
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        /// Path of the catalog file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Catalog document is not valid JSON in a supported shape.
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}
