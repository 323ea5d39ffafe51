use std::borrow::Cow;

use url::Url;

use super::*;
use crate::errors::*;
use crate::prelude::*;

// Values with no scheme still need to parse like full URIs, so they get a
// neutral scheme prepended first; the scheme itself is never compared
const PLACEHOLDER_SCHEME: &str = "scrape";

// Check that a user-declared endpoint refers to the discovered target
// address.  The comparison is strictly on the parsed authority (host:port) so
// that the target showing up in a path or query string doesn't count as a
// match.  Backtick expressions are resolved against the live target later, at
// receiver start time, and are accepted as-is.
pub(crate) fn validate_endpoint(declared: &str, default_endpoint: &str) -> EmptyResult {
    if declared.contains(ENDPOINT_EXPR) {
        return Ok(());
    }

    let invalid = || DiscoveryError::invalid_endpoint(&format!("{declared} (expected {default_endpoint})"));

    let uri = if declared.contains("://") {
        Cow::from(declared)
    } else {
        Cow::from(format!("{PLACEHOLDER_SCHEME}://{declared}"))
    };
    let parsed = Url::parse(&uri).map_err(|_| invalid())?;

    let authority = match (parsed.host_str(), parsed.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.into(),
        _ => String::new(),
    };
    if authority != default_endpoint {
        bail!(invalid());
    }
    Ok(())
}
