//! Conventional decoding of remote-store snapshots.
//!
//! A snapshot is a named view over one node of the store's JSON tree. Record
//! types are rehydrated by constructing their defaults and overwriting each
//! field whose serialized name appears under the node, so records decoded
//! from older exports keep defaults for fields the export predates.

use crate::{CoreError, Result};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A named view over one node of a database export.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    key: String,
    value: Value,
}

impl Snapshot {
    /// Wrap an already-parsed JSON tree.
    pub fn from_value<S: Into<String>>(key: S, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// Parse JSON text into a snapshot rooted at `key`.
    #[track_caller]
    pub fn from_json<S: Into<String>>(key: S, json: &str) -> Result<Self> {
        let value = serde_json::from_str(json).map_err(|e| CoreError::SnapshotParse {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self {
            key: key.into(),
            value,
        })
    }

    /// Name of this node.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Raw JSON value of this node.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Whether the node holds any data. Navigating to a missing path yields
    /// a non-existent snapshot rather than an error.
    pub fn exists(&self) -> bool {
        !self.value.is_null()
    }

    /// Navigate a `/`-separated path below this node.
    ///
    /// Empty segments are skipped, so `child("")` is this node itself. A
    /// segment that does not exist yields a non-existent snapshot keyed by
    /// the last segment of the path.
    pub fn child(&self, path: &str) -> Snapshot {
        let mut key = self.key.clone();
        let mut value = &self.value;

        for segment in path.split('/').filter(|s| !s.is_empty()) {
            key = segment.to_string();
            value = match value {
                Value::Object(map) => map.get(segment).unwrap_or(&Value::Null),
                _ => &Value::Null,
            };
        }

        Snapshot {
            key,
            value: value.clone(),
        }
    }

    /// Child snapshots of an object node, one per entry in map order.
    /// Scalars and non-existent nodes have no children.
    pub fn children(&self) -> Vec<Snapshot> {
        match &self.value {
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| Snapshot {
                    key: k.clone(),
                    value: v.clone(),
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Decode this node into `T`.
    ///
    /// Record types carry per-field defaults: entries matching a field by
    /// serialized name overwrite it, absent fields keep their defaults, and
    /// unknown entries are ignored. A present value that does not fit the
    /// field's type is an error, not a silent default.
    #[track_caller]
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.value.clone()).map_err(|e| CoreError::SnapshotDecode {
            key: self.key.clone(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Decode this node into `T`, mapping a non-existent node to `None`.
    #[track_caller]
    pub fn decode_opt<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        if !self.exists() {
            return Ok(None);
        }

        self.decode().map(Some)
    }
}
