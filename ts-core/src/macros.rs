pub use std::collections::BTreeMap;

// Generate labels or annotations for a k8s object, using
// klabel!("key1" => "value1", "key2" => "value2") syntax
#[macro_export]
macro_rules! klabel {
    ($($key:tt => $val:expr),+$(,)?) => {
        Some(BTreeMap::from([$(($key.to_string(), $val.to_string())),+]))
    };
}

pub use klabel;
