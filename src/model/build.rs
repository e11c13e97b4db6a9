use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::db::ChampionBuildModel;

/// Ordered item build recorded for a champion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    /// Database identifier.
    pub id: i32,
    /// Case-folded champion name.
    pub subject: String,
    /// Item ids in the order they were given.
    pub item_ids: Vec<String>,
    /// Case-folded identity of the author.
    pub owner: String,
    /// When the build was recorded.
    pub created_at: NaiveDateTime,
}

impl From<ChampionBuildModel> for Build {
    fn from(model: ChampionBuildModel) -> Self {
        let item_ids = model.item_ids();

        Self {
            id: model.id,
            subject: model.champion,
            item_ids,
            owner: model.author,
            created_at: model.created_at,
        }
    }
}

/// Comparison-stable form of a champion or author name.
///
/// Trims surrounding whitespace and case-folds, so `"  Ashe "` and `"ashe"` refer to the same
/// champion.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_key("  UserA "), "usera");
        assert_eq!(normalize_key("Kai'Sa"), "kai'sa");
        assert_eq!(normalize_key("   "), "");
    }
}
