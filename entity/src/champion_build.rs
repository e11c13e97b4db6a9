use sea_orm::entity::prelude::*;

/// Separator used to join item ids into the `item_ids` column.
///
/// Catalog ids can never contain this character.
pub const ITEM_ID_DELIMITER: char = ',';

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "champion_build")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub champion: String,
    pub item_ids: String,
    pub author: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Item ids of the build in the order they were stored.
    pub fn item_ids(&self) -> Vec<String> {
        decode_item_ids(&self.item_ids)
    }
}

/// Joins an ordered id sequence into its column representation.
pub fn encode_item_ids<S: AsRef<str>>(item_ids: &[S]) -> String {
    item_ids
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(&ITEM_ID_DELIMITER.to_string())
}

/// Splits the column representation back into ordered ids.
pub fn decode_item_ids(raw: &str) -> Vec<String> {
    raw.split(ITEM_ID_DELIMITER)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
