use std::collections::BTreeMap;

use rstest::fixture;
use ts_testutils::{
    test_pod,
    TEST_POD_IP,
    TEST_PORT,
    TEST_PORT_NAME,
};

use crate::observer::{
    Endpoint,
    EndpointDetails,
    PodDetails,
    PortDetails,
};

// The Endpoint fixture must be constructed inside ts-core so that its type
// resolves to this crate's `cfg(test)` instance; the same fixture defined in
// ts-testutils yields the plain-lib instance, which the unit tests cannot mix
// with their own `Endpoint`. Mirrors ts_testutils::test_endpoint exactly.
#[fixture]
pub(crate) fn test_endpoint(
    #[default(BTreeMap::new())] annotations: BTreeMap<String, String>,
    #[default(Some(TEST_PORT))] port: Option<u16>,
) -> Endpoint {
    let pod = PodDetails::from_pod(&test_pod(Some(annotations)));
    let details = PortDetails { name: TEST_PORT_NAME.into(), pod, port };

    Endpoint {
        id: details.endpoint_id(),
        target: match port {
            Some(p) => format!("{TEST_POD_IP}:{p}"),
            None => TEST_POD_IP.into(),
        },
        details: EndpointDetails::Port(details),
    }
}
