use std::time::Duration;

use buildbook_test_utils::prelude::*;

use crate::{
    catalog::Catalog,
    error::{build::BuildError, Error},
    service::build::BuildService,
};


const TEST_STORAGE_TIMEOUT: Duration = Duration::from_secs(5);

fn mock_catalog() -> Catalog {
    Catalog::from_json(MOCK_CATALOG_JSON).expect("mock catalog is valid")
}
