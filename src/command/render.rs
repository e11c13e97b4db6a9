//! Reply formatting.

use crate::{catalog::Catalog, model::build::Build};

/// Capitalizes every word of a champion name for display.
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Display names of the given item ids, falling back to the id for unknown items.
pub fn item_names<S: AsRef<str>>(catalog: &Catalog, item_ids: &[S]) -> String {
    item_ids
        .iter()
        .map(|id| {
            let id = id.as_ref();
            catalog
                .get(id)
                .map(|item| item.name.as_str())
                .unwrap_or(id)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Lists every build for a champion, one line each.
pub fn build_list(catalog: &Catalog, champion: &str, builds: &[Build]) -> String {
    if builds.is_empty() {
        return "No such builds found".to_string();
    }

    let lines = builds
        .iter()
        .map(|build| {
            format!(
                "- {} *(by {})*",
                item_names(catalog, &build.item_ids),
                build.owner
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("**Builds for {}**:\n{}", title_case(champion), lines)
}
