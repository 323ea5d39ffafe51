use std::collections::BTreeMap;

use crate::prelude::*;

// Look up the effective value of one hint field.  A hint scoped to the
// endpoint's port ({prefix}.{scope}/{suffix}) shadows the pod-level one
// ({prefix}/{suffix}) in full; the two are never merged.
pub(crate) fn resolve_hint<'a>(
    annotations: &'a BTreeMap<String, String>,
    prefix: &str,
    scope: &str,
    suffix: &str,
) -> Option<&'a str> {
    if !scope.is_empty() {
        if let Some(v) = annotations.get(&format!("{prefix}.{scope}/{suffix}")) {
            return Some(v);
        }
    }
    annotations.get(&format!("{prefix}/{suffix}")).map(String::as_str)
}

// Anything other than a literal (case-insensitive) "true" counts as disabled
pub(crate) fn hint_enabled(annotations: &BTreeMap<String, String>, prefix: &str, scope: &str) -> bool {
    resolve_hint(annotations, prefix, scope, ENABLED_SUFFIX).is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}
