use std::collections::HashSet;

use serde::{
    Deserialize,
    Serialize,
};

// Discovery settings the agent's config file hands to the resolver at
// construction time; hint resolution is off unless the operator turns it on
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryConfig {
    #[serde(default)]
    pub enabled: bool,

    // Scraper types that must never be instantiated via hints
    #[serde(default)]
    pub ignore_receivers: HashSet<String>,
}
