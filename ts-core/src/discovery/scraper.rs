use std::collections::BTreeMap;

use tracing::*;

use super::*;
use crate::prelude::*;

// Resolve one signal's config hint into the receiver config tree it
// describes, and make sure the tree ends up with a usable dial target under
// the reserved `endpoint` key.  Every other key passes through untouched.
pub(crate) fn resolve_scraper_config(
    annotations: &BTreeMap<String, String>,
    prefix: &str,
    scope: &str,
    default_endpoint: &str,
) -> anyhow::Result<ReceiverConfig> {
    let mut config: ReceiverConfig = match hints::resolve_hint(annotations, prefix, scope, CONFIG_SUFFIX) {
        Some(doc) if !doc.trim().is_empty() => yaml::from_str(doc)
            .map_err(|e| DiscoveryError::malformed_config(&format!("{}: {e}", config_hint_key(prefix, scope))))?,
        _ => ReceiverConfig::new(),
    };

    // A declared literal endpoint has to match the discovered target (or be
    // a deferred backtick expression) and is then preserved verbatim;
    // anything else gets filled in with the target for the operator
    match config.get(ENDPOINT_CONFIG_KEY) {
        Some(yaml::Value::String(declared)) if !declared.is_empty() => {
            endpoint::validate_endpoint(declared, default_endpoint)?;
        },
        _ => {
            debug!("no endpoint declared in {}, using {default_endpoint}", config_hint_key(prefix, scope));
            config.insert(ENDPOINT_CONFIG_KEY.into(), default_endpoint.into());
        },
    }

    Ok(config)
}

fn config_hint_key(prefix: &str, scope: &str) -> String {
    if scope.is_empty() {
        format!("{prefix}/{CONFIG_SUFFIX}")
    } else {
        format!("{prefix}.{scope}/{CONFIG_SUFFIX}")
    }
}
