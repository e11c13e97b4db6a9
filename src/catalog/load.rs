//! Catalog loading from JSON documents.
//!
//! Two shapes are accepted: a plain list of items, and a Data Dragon `item.json` document
//! where the `colloq` field carries `;`-separated colloquial names used as aliases.

use std::{
    collections::{BTreeMap, HashMap},
    path::Path,
};

use dioxus_logger::tracing;
use serde::Deserialize;

use crate::{catalog::Catalog, error::catalog::CatalogError, model::catalog::Item};

/// Data Dragon map id of Summoner's Rift.
pub const SUMMONERS_RIFT_MAP_ID: &str = "11";

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<Item>),
    DataDragon(DataDragonDocument),
}

#[derive(Deserialize)]
struct DataDragonDocument {
    data: BTreeMap<String, DataDragonItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DataDragonItem {
    name: String,
    #[serde(default)]
    colloq: String,
    #[serde(default = "default_in_store")]
    in_store: bool,
    #[serde(default)]
    maps: HashMap<String, bool>,
}

fn default_in_store() -> bool {
    true
}

impl DataDragonItem {
    /// Items missing from the shop or from Summoner's Rift are not offered for matching.
    fn is_available(&self) -> bool {
        self.in_store
            && (self.maps.is_empty()
                || self.maps.get(SUMMONERS_RIFT_MAP_ID).copied().unwrap_or(false))
    }

    fn into_item(self, id: String) -> Item {
        let aliases = self
            .colloq
            .split(';')
            .map(str::trim)
            .filter(|alias| !alias.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();

        Item::new(id, self.name).with_aliases(aliases)
    }
}

impl Catalog {
    /// Parses a catalog from a JSON document.
    ///
    /// # Returns
    /// - `Ok(Catalog)` - Document parsed and every item passed validation
    /// - `Err(CatalogError::Parse)` - Document is not a supported catalog shape
    /// - `Err(CatalogError)` - An item violates a catalog invariant
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items = match serde_json::from_str::<CatalogDocument>(json)? {
            CatalogDocument::List(items) => items,
            CatalogDocument::DataDragon(document) => {
                let total = document.data.len();
                let items = document
                    .data
                    .into_iter()
                    .filter(|(_, item)| item.is_available())
                    .map(|(id, item)| item.into_item(id))
                    .collect::<Vec<_>>();

                tracing::debug!(
                    "Skipped {} unavailable Data Dragon items",
                    total - items.len()
                );

                items
            }
        };

        Self::new(items)
    }

    /// Reads and parses a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json(&json)
    }
}
