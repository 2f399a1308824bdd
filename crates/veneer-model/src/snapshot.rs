// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Canonical snapshot values
//!
//! A snapshot is a cycle-free nested value produced from an entity's
//! whitelisted properties at a point in time. It carries no reference
//! back to the handle it was taken from, so it is safe to print, diff,
//! or transmit. Key order is the descriptor-defined extraction order and
//! is preserved by serialization.

use serde::de::{MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A single extracted property value
///
/// `Unavailable` is the explicit marker for a property the host could
/// not supply; it isolates a per-key extraction failure without
/// aborting the rest of the snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SnapshotValue {
    /// Property could not be extracted from the host
    Unavailable,
    /// Boolean scalar
    Bool(bool),
    /// Integer scalar
    Int(i64),
    /// Floating-point scalar
    Float(f64),
    /// Text scalar
    Text(String),
    /// Ordered sequence
    Seq(Vec<SnapshotValue>),
    /// Nested string-keyed mapping
    Map(Snapshot),
}

impl SnapshotValue {
    /// Text accessor, `None` for any other variant
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SnapshotValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Integer accessor, `None` for any other variant
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SnapshotValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Whether this value is the unavailable marker
    pub fn is_unavailable(&self) -> bool {
        matches!(self, SnapshotValue::Unavailable)
    }
}

impl From<&str> for SnapshotValue {
    fn from(s: &str) -> Self {
        SnapshotValue::Text(s.to_string())
    }
}

impl From<String> for SnapshotValue {
    fn from(s: String) -> Self {
        SnapshotValue::Text(s)
    }
}

impl From<i64> for SnapshotValue {
    fn from(i: i64) -> Self {
        SnapshotValue::Int(i)
    }
}

impl From<f64> for SnapshotValue {
    fn from(f: f64) -> Self {
        SnapshotValue::Float(f)
    }
}

impl From<bool> for SnapshotValue {
    fn from(b: bool) -> Self {
        SnapshotValue::Bool(b)
    }
}

/// Ordered string-keyed mapping of extracted properties
///
/// Insertion order is significant: two snapshots are structurally equal
/// only if they hold the same keys in the same order with equal values.
/// The extractor always inserts in whitelist order, which is what makes
/// snapshots of an unmutated entity stable across calls.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Snapshot {
    entries: Vec<(String, SnapshotValue)>,
}

impl Snapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key/value pair at the end
    ///
    /// An existing entry under the same key is replaced in place so the
    /// original position is kept.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<SnapshotValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&SnapshotValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SnapshotValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SnapshotVisitor;

        impl<'de> Visitor<'de> for SnapshotVisitor {
            type Value = Snapshot;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string-keyed map of snapshot values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Snapshot, A::Error> {
                let mut snapshot = Snapshot::new();
                while let Some((key, value)) = access.next_entry::<String, SnapshotValue>()? {
                    snapshot.insert(key, value);
                }
                Ok(snapshot)
            }
        }

        deserializer.deserialize_map(SnapshotVisitor)
    }
}
