// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Line-style descriptor
//!
//! A line style is a document setting, not a model element; the host
//! exposes it through a category-like handle. The whitelist covers the
//! style itself (name, weight, color) and its applied line pattern.

use super::{cached_snapshot, check_handle, display_name};
use crate::extractor::render_snapshot;
use std::cell::OnceCell;
use veneer_model::{ElementKind, EntityHandle, Host, Result, Snapshot, SnapshotValue};

/// Typed facade over a line-style category
pub struct LineStyleDescriptor<'a> {
    host: &'a dyn Host,
    handle: EntityHandle,
    snapshot: OnceCell<Snapshot>,
}

impl<'a> LineStyleDescriptor<'a> {
    /// Wrap a line-style handle
    pub fn new(host: &'a dyn Host, handle: EntityHandle) -> Result<Self> {
        check_handle(
            host,
            handle,
            ElementKind::LineStyleCategory,
            "line style descriptor",
        )?;
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

    /// Line-style display name
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

    /// Style color as ordered RGB components, if the host reports one
    pub fn rgb(&self) -> Result<Option<[i64; 3]>> {
        let snapshot = self.serialized()?;
        let Some(SnapshotValue::Seq(seq)) = snapshot.get("rgb") else {
            return Ok(None);
        };
        if seq.len() != 3 {
            return Ok(None);
        }
        let mut rgb = [0i64; 3];
        for (slot, value) in rgb.iter_mut().zip(seq) {
            match value.as_int() {
                Some(component) => *slot = component,
                None => return Ok(None),
            }
        }
        Ok(Some(rgb))
    }

    /// Name of the applied line pattern; solid styles report "Solid"
    pub fn pattern_name(&self) -> Result<String> {
        let snapshot = self.serialized()?;
        Ok(snapshot
            .get("pattern_name")
            .and_then(|v| v.as_text())
            .unwrap_or("Solid")
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::ScriptedHost;

    #[test]
    fn test_line_style_snapshot() {
        let mut host = ScriptedHost::new();
        let style = host.add_element(ElementKind::LineStyleCategory);
        host.set_property(style, "name", "Medium Lines");
        host.set_property(style, "weight", 3i64);
        host.set_property(
            style,
            "rgb",
            SnapshotValue::Seq(vec![0i64.into(), 128i64.into(), 255i64.into()]),
        );
        host.set_property(style, "pattern_name", "Dash");

        let descriptor = LineStyleDescriptor::new(&host, style).unwrap();
        assert_eq!(descriptor.name().unwrap(), "Medium Lines");
        assert_eq!(descriptor.rgb().unwrap(), Some([0, 128, 255]));
        assert_eq!(descriptor.pattern_name().unwrap(), "Dash");
    }

    #[test]
    fn test_solid_style_defaults_pattern_name() {
        let mut host = ScriptedHost::new();
        let style = host.add_element(ElementKind::LineStyleCategory);
        host.set_property(style, "name", "Thin Lines");

        let descriptor = LineStyleDescriptor::new(&host, style).unwrap();
        assert_eq!(descriptor.pattern_name().unwrap(), "Solid");
        assert_eq!(descriptor.rgb().unwrap(), None);
    }
}
