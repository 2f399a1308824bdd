// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Family descriptor

use super::{cached_snapshot, check_handle, display_name};
use crate::extractor::render_snapshot;
use std::cell::OnceCell;
use veneer_model::{ElementKind, EntityHandle, Host, Result, Snapshot};

/// Typed facade over a loadable family definition
pub struct FamilyDescriptor<'a> {
    host: &'a dyn Host,
    handle: EntityHandle,
    snapshot: OnceCell<Snapshot>,
}

impl<'a> FamilyDescriptor<'a> {
    /// Wrap a family handle
    pub fn new(host: &'a dyn Host, handle: EntityHandle) -> Result<Self> {
        check_handle(host, handle, ElementKind::Family, "family descriptor")?;
        Ok(Self {
            host,
            handle,
            snapshot: OnceCell::new(),
        })
    }

    /// The wrapped handle
    pub fn handle(&self) -> EntityHandle {
        self.handle
    }

    /// Family display name
    pub fn name(&self) -> Result<String> {
        display_name(self.host, self.handle, "name")
    }

    /// Serialized snapshot, extracted on first access
    pub fn serialized(&self) -> Result<&Snapshot> {
        cached_snapshot(&self.snapshot, self.host, self.handle)
    }

    /// Snapshot rendered as pretty JSON
    pub fn serialized_json(&self) -> Result<String> {
        render_snapshot(self.serialized()?)
    }

    /// Number of placed instances of this family, if the host reports it
    pub fn placed_instance_count(&self) -> Result<Option<i64>> {
        Ok(self.serialized()?.get("placed_instances_count").and_then(|v| v.as_int()))
    }

    /// Number of defined family types, if the host reports it
    pub fn types_count(&self) -> Result<Option<i64>> {
        Ok(self.serialized()?.get("types_count").and_then(|v| v.as_int()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::ScriptedHost;
    use veneer_model::{AdapterError, Snapshot, SnapshotValue};

    #[test]
    fn test_family_snapshot_and_counts() {
        let mut host = ScriptedHost::new();
        let family = host.add_element(ElementKind::Family);
        host.set_property(family, "name", "W12x26");
        host.set_property(family, "category", "Structural Framing");
        host.set_property(family, "types_count", 4i64);
        host.set_property(family, "placed_instances_count", 12i64);
        let mut params = Snapshot::new();
        params.insert("Flange Width", 0.54);
        host.set_property(family, "parameter_values", SnapshotValue::Map(params));

        let descriptor = FamilyDescriptor::new(&host, family).unwrap();
        assert_eq!(descriptor.name().unwrap(), "W12x26");
        assert_eq!(descriptor.types_count().unwrap(), Some(4));
        assert_eq!(descriptor.placed_instance_count().unwrap(), Some(12));

        let snapshot = descriptor.serialized().unwrap();
        assert!(matches!(
            snapshot.get("parameter_values"),
            Some(SnapshotValue::Map(_))
        ));
    }

    #[test]
    fn test_snapshot_is_cached() {
        let mut host = ScriptedHost::new();
        let family = host.add_element(ElementKind::Family);
        host.set_property(family, "name", "Door 36\"");

        let descriptor = FamilyDescriptor::new(&host, family).unwrap();
        let first = descriptor.serialized().unwrap() as *const Snapshot;
        let second = descriptor.serialized().unwrap() as *const Snapshot;
        assert_eq!(first, second);
    }

    #[test]
    fn test_nameless_family() {
        let mut host = ScriptedHost::new();
        let family = host.add_element(ElementKind::Family);
        host.set_property(family, "name", "   ");

        let descriptor = FamilyDescriptor::new(&host, family).unwrap();
        assert!(matches!(
            descriptor.name().unwrap_err(),
            AdapterError::EmptyName(_)
        ));
    }
}
