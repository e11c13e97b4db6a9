//! Database model type aliases.
//!
//! Single point of reference for SeaORM entity models so the rest of the crate does not
//! import from the `entity` crate directly.

/// Type alias for the persisted champion build model.
///
/// # Fields (from `entity::champion_build::Model`)
/// - `id` - Primary key
/// - `champion` - Case-folded champion name the build is for
/// - `item_ids` - Item ids joined with [`entity::champion_build::ITEM_ID_DELIMITER`]
/// - `author` - Case-folded identity of the user who recorded the build
/// - `created_at` - Timestamp of insertion, never updated
pub type ChampionBuildModel = entity::champion_build::Model;
