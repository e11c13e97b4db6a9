use buildbook_test_utils::prelude::*;

use crate::data::build::BuildRepository;

mod create;
