use rstest::fixture;
use ts_core::macros::*;
use ts_core::prelude::*;

use crate::constants::*;

#[fixture]
pub fn test_pod(#[default(None)] annotations: Option<BTreeMap<String, String>>) -> corev1::Pod {
    corev1::Pod {
        metadata: metav1::ObjectMeta {
            namespace: Some(TEST_NAMESPACE.into()),
            name: Some(TEST_POD_NAME.into()),
            uid: Some(TEST_POD_UID.into()),
            labels: klabel!("env" => "prod"),
            annotations,
            ..Default::default()
        },
        spec: Some(corev1::PodSpec { ..Default::default() }),
        status: Some(corev1::PodStatus { ..Default::default() }),
    }
}

// An observer-style port endpoint for the fixture pod; the target carries the
// port whenever the observer knows one
#[fixture]
pub fn test_endpoint(
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
