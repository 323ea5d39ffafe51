
use std::collections::{
    BTreeMap,
    HashSet,
};

use assertables::*;
use rstest::*;
use tracing_test::traced_test;
use ts_testutils::*;

use super::endpoint::validate_endpoint;
use super::hints::{
    hint_enabled,
    resolve_hint,
};
use super::scraper::resolve_scraper_config;
use super::*;
use crate::prelude::*;
use crate::test_support::test_endpoint;

pub fn annotations(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}
