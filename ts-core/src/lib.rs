pub mod constants;
pub mod discovery;
pub mod errors;
pub mod logging;
pub mod macros;
pub mod observer;

#[cfg(test)]
mod test_support;

pub mod prelude {
    pub use k8s_openapi::api::core::v1 as corev1;
    pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
    pub use kube::ResourceExt;

    pub use crate::constants::*;
    pub use crate::discovery::{
        DiscoveryConfig,
        HintsBuilder,
        ReceiverConfig,
        ReceiverId,
        ReceiverTemplate,
        Signal,
        SignalSet,
    };
    pub use crate::errors::EmptyResult;
    pub use crate::observer::*;
}
