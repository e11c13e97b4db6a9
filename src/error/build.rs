use thiserror::Error;

/// Precondition violations for build operations.
///
/// None of these are retried, the request has to be corrected by the caller.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// A build needs at least one resolved item.
    #[error("A build needs at least one item")]
    EmptyItemIds,
    /// Champion name was empty after normalization.
    #[error("A champion name is required")]
    EmptySubject,
    /// Author identity was empty after normalization.
    #[error("An author is required")]
    EmptyOwner,
    /// Item id is not present in the loaded catalog.
    #[error("Unknown item ID: {0}")]
    UnknownItemId(String),
}
