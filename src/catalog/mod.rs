//! In-memory item catalog.
//!
//! The catalog is loaded once at startup (see [`load`]) and never mutated afterwards, so it
//! is shared between tasks through an `Arc` without any locking.

pub mod load;

use std::collections::HashMap;

use entity::champion_build::ITEM_ID_DELIMITER;

use crate::{error::catalog::CatalogError, model::catalog::Item};

/// Immutable table of known items, in load order.
#[derive(Debug, Default)]
pub struct Catalog {
    items: Vec<Item>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from a list of items.
    ///
    /// Item ids must be unique, non-empty and free of the storage delimiter, and every item
    /// needs a name with at least one letter or digit, since anything else normalizes to
    /// nothing in the matcher. Names and aliases are trimmed, aliases without letters or digits
    /// are dropped.
    ///
    /// # Returns
    /// - `Ok(Catalog)` - Catalog containing every item in the given order
    /// - `Err(CatalogError)` - An item violates one of the invariants above
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut catalog = Self {
            items: Vec::with_capacity(items.len()),
            by_id: HashMap::with_capacity(items.len()),
        };

        for item in items {
            let id = item.id.trim().to_string();
            let name = item.name.trim().to_string();

            if id.is_empty() {
                return Err(CatalogError::EmptyId(name));
            }
            if id.contains(ITEM_ID_DELIMITER) {
                return Err(CatalogError::ReservedDelimiter(id, ITEM_ID_DELIMITER));
            }
            if !has_searchable_text(&name) {
                return Err(CatalogError::EmptyName(id));
            }
            if catalog.by_id.contains_key(&id) {
                return Err(CatalogError::DuplicateId(id));
            }

            let aliases = item
                .aliases
                .iter()
                .map(|alias| alias.trim())
                .filter(|alias| has_searchable_text(alias))
                .map(str::to_string)
                .collect();

            catalog.by_id.insert(id.clone(), catalog.items.len());
            catalog.items.push(Item { id, name, aliases });
        }

        Ok(catalog)
    }

    /// Looks up an item by id.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.by_id.get(id).map(|&index| &self.items[index])
    }

    /// Returns true if an item with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// All items in load order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Names made only of punctuation normalize to nothing and could never be matched.
fn has_searchable_text(name: &str) -> bool {
    name.chars().any(char::is_alphanumeric)
}
