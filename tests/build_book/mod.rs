mod builds;
mod matcher;

use std::{sync::Arc, time::Duration};

use buildbook::catalog::Catalog;
use buildbook_test_utils::prelude::MOCK_CATALOG_JSON;

pub const TEST_STORAGE_TIMEOUT: Duration = Duration::from_secs(5);

pub fn mock_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::from_json(MOCK_CATALOG_JSON).expect("mock catalog is valid"))
}
