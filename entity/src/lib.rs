pub mod prelude;

pub mod champion_build;
