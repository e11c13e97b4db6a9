pub use super::champion_build::Entity as ChampionBuild;
