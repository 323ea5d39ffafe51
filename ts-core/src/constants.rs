use const_format::concatcp;

// Hint annotation namespaces; operators attach these to pods to opt a
// workload into discovery, e.g.
//
//   io.telescout.discovery.metrics/enabled: "true"
//   io.telescout.discovery.metrics.6379/config: |
//     collection_interval: 20s
//
// A hint scoped to a port number applies to the container exposing that
// port; an unscoped hint applies to the whole pod.
pub const DISCOVERY_HINTS_NAMESPACE: &str = "io.telescout.discovery";
pub const METRICS_HINTS_PREFIX: &str = concatcp!(DISCOVERY_HINTS_NAMESPACE, ".metrics");
pub const LOGS_HINTS_PREFIX: &str = concatcp!(DISCOVERY_HINTS_NAMESPACE, ".logs");
pub const TRACES_HINTS_PREFIX: &str = concatcp!(DISCOVERY_HINTS_NAMESPACE, ".traces");

// Hint field suffixes (the part after the '/')
pub const ENABLED_SUFFIX: &str = "enabled";
pub const SCRAPER_SUFFIX: &str = "scraper";
pub const CONFIG_SUFFIX: &str = "config";

// Reserved config key holding the receiver's dial target
pub const ENDPOINT_CONFIG_KEY: &str = "endpoint";

// Backtick expression that defers endpoint resolution to receiver start
// time; config values containing it are passed through unvalidated
pub const ENDPOINT_EXPR: &str = "`endpoint`";
