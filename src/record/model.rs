//! LockRecord data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Arbitrary user data attached to a record.
pub type Metadata = BTreeMap<String, Vec<u8>>;

/// The unit of durable state stored in a record file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockRecord {
    /// True when the resource is claimed.
    pub locked: bool,

    /// Last time the timestamp was set, in microseconds since the Unix epoch.
    pub timestamp: i64,

    /// User metadata. `None` until the first key is written.
    #[serde(default, with = "metadata_base64")]
    pub metadata: Option<Metadata>,
}

impl LockRecord {
    /// Create an unlocked record stamped with the current time and no metadata.
    pub fn new() -> Self {
        Self {
            locked: false,
            timestamp: Utc::now().timestamp_micros(),
            metadata: None,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The stored timestamp in microseconds since the Unix epoch.
    pub fn timestamp_micros(&self) -> i64 {
        self.timestamp
    }

    /// The stored timestamp as a UTC instant.
    ///
    /// Returns `None` only for values outside chrono's representable range,
    /// which can appear in a hand-edited file.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_micros(self.timestamp)
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}

impl Default for LockRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Serde adapter storing metadata values as base64 strings.
mod metadata_base64 {
    use super::Metadata;
    use base64::{Engine, engine::general_purpose::STANDARD};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S: Serializer>(
        value: &Option<Metadata>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            None => serializer.serialize_none(),
            Some(map) => {
                let encoded: BTreeMap<&str, String> = map
                    .iter()
                    .map(|(key, bytes)| (key.as_str(), STANDARD.encode(bytes)))
                    .collect();
                serializer.serialize_some(&encoded)
            }
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Metadata>, D::Error> {
        let encoded: Option<BTreeMap<String, String>> = Option::deserialize(deserializer)?;
        encoded
            .map(|map| {
                map.into_iter()
                    .map(|(key, text)| {
                        STANDARD
                            .decode(text.as_bytes())
                            .map(|bytes| (key, bytes))
                            .map_err(D::Error::custom)
                    })
                    .collect::<Result<Metadata, D::Error>>()
            })
            .transpose()
    }
}
