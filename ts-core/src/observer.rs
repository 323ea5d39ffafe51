use std::collections::BTreeMap;

use crate::prelude::*;

// The cluster observer reports one Endpoint per scrapeable network location
// it sees; the resolver core never watches the cluster itself.  These types
// are the read-only boundary between the observer and the resolver.
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoint {
    pub id: String,
    pub target: String,
    pub details: EndpointDetails,
}

// Endpoints discovered from different sources carry different payloads; pod
// ports are the only variant the hints resolver acts on
#[derive(Clone, Debug, PartialEq)]
pub enum EndpointDetails {
    Pod(PodDetails),
    Port(PortDetails),
}

impl EndpointDetails {
    pub fn pod_and_port(&self) -> Option<(&PodDetails, Option<u16>)> {
        match self {
            EndpointDetails::Port(port) => Some((&port.pod, port.port)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PodDetails {
    pub name: String,
    pub namespace: String,
    pub uid: String,
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
}

impl PodDetails {
    // Flatten the fields the resolver cares about out of a live pod object
    pub fn from_pod(pod: &corev1::Pod) -> PodDetails {
        PodDetails {
            name: pod.name_any(),
            namespace: pod.namespace().unwrap_or_default(),
            uid: pod.uid().unwrap_or_default(),
            labels: pod.labels().clone(),
            annotations: pod.annotations().clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PortDetails {
    pub name: String,
    pub pod: PodDetails,

    // None means the observer could not determine a port for this endpoint
    pub port: Option<u16>,
}

impl PortDetails {
    pub fn endpoint_id(&self) -> String {
        match self.port {
            Some(p) => format!("{}/{}/{}({p})", self.pod.namespace, self.pod.uid, self.name),
            None => format!("{}/{}/{}", self.pod.namespace, self.pod.uid, self.name),
        }
    }
}
