mod builder;
mod config;
mod endpoint;
mod hints;
mod receiver_id;
mod scraper;
mod template;

pub use builder::HintsBuilder;
pub use config::DiscoveryConfig;
pub use receiver_id::ReceiverId;
use serde_yaml as yaml;
pub use template::{
    ReceiverTemplate,
    Signal,
    SignalSet,
};

use crate::errors::*;

// The resolved config tree for one receiver instance; the schema is
// receiver-type-specific, so it stays a generic yaml mapping
pub type ReceiverConfig = yaml::Mapping;

err_impl! {DiscoveryError,
    #[error("endpoint has no port: {0}")]
    MissingPort(String),

    #[error("malformed config hint: {0}")]
    MalformedConfig(String),

    #[error("declared endpoint does not match discovered target: {0}")]
    InvalidEndpoint(String),

    #[error("enabled signals disagree on scraper type: {0}")]
    ConflictingScrapers(String),
}

#[cfg(test)]
pub mod tests;
