pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::catalog::{
            MOCK_CATALOG_JSON, MERCURYS_TREADS_ID, RABADONS_DEATHCAP_ID, VOID_STAFF_ID,
        },
        TestBuilder, TestContext, TestError,
    };
}
