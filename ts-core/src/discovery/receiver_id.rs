use std::fmt;

use serde::{
    de,
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};

// A receiver instance identity in the format "scraper/name", where the name
// is derived from the owning pod's uid and the discovered port.  Two observer
// events for the same pod and port always map to the same id, which is what
// lets the discovery loop replace the old receiver on an update instead of
// leaking it.
//
// For serialization/deserialization we convert to the "scraper/name" string
// form, the same one the identity displays as.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ReceiverId {
    scraper: String,
    name: String,
}

impl ReceiverId {
    pub fn new(scraper: &str, pod_uid: &str, port: u16) -> ReceiverId {
        ReceiverId {
            scraper: scraper.into(),
            name: format!("{pod_uid}_{port}"),
        }
    }

    pub fn scraper(&self) -> &str {
        &self.scraper
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ReceiverId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.scraper, self.name)
    }
}

impl Serialize for ReceiverId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // reuse the display impl for serializing
        serializer.serialize_str(&format!("{self}"))
    }
}

struct ReceiverIdVisitor;

impl<'de> de::Visitor<'de> for ReceiverIdVisitor {
    type Value = ReceiverId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a receiver identity in the format scraper/name")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match value.split_once('/') {
            Some((scraper, name)) if !scraper.is_empty() && !name.is_empty() => Ok(ReceiverId {
                scraper: scraper.into(),
                name: name.into(),
            }),
            _ => Err(E::custom(format!("invalid format for receiver id: {value}"))),
        }
    }
}

impl<'de> Deserialize<'de> for ReceiverId {
    fn deserialize<D>(deserializer: D) -> Result<ReceiverId, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(ReceiverIdVisitor)
    }
}
