// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Document descriptor

use super::{cached_snapshot, check_handle, display_name};
use crate::extractor::render_snapshot;
use std::cell::OnceCell;
use veneer_model::{ElementKind, EntityHandle, Host, Result, Snapshot};

/// Typed facade over the open document
///
/// Covers the document-level whitelist (title, application version,
/// user, external references) plus enumeration of document settings
/// such as line styles.
pub struct DocumentDescriptor<'a> {
    host: &'a dyn Host,
    handle: EntityHandle,
    snapshot: OnceCell<Snapshot>,
}

impl<'a> DocumentDescriptor<'a> {
    /// Wrap the document handle
    pub fn new(host: &'a dyn Host, handle: EntityHandle) -> Result<Self> {
        check_handle(host, handle, ElementKind::Document, "document descriptor")?;
        Ok(Self {
            host,
            handle,
            snapshot: OnceCell::new(),
        })
    }

    /// Wrap the currently open document
    pub fn active(host: &'a dyn Host) -> Result<Self> {
        Self::new(host, host.elements().active_document())
    }

    /// The wrapped handle
    pub fn handle(&self) -> EntityHandle {
        self.handle
    }

    /// Document title
    pub fn name(&self) -> Result<String> {
        display_name(self.host, self.handle, "title")
    }

    /// Serialized snapshot, extracted on first access
    pub fn serialized(&self) -> Result<&Snapshot> {
        cached_snapshot(&self.snapshot, self.host, self.handle)
    }

    /// Snapshot rendered as pretty JSON
    pub fn serialized_json(&self) -> Result<String> {
        render_snapshot(self.serialized()?)
    }

    /// Line styles loaded in the document, as line-style handles
    ///
    /// Line styles are document settings, not model elements; the host
    /// surfaces them as a filtered collection.
    pub fn line_styles(&self) -> Vec<EntityHandle> {
        self.host.elements().collect(ElementKind::LineStyleCategory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::ScriptedHost;
    use veneer_model::AdapterError;

    #[test]
    fn test_active_document_snapshot() {
        let mut host = ScriptedHost::new();
        let doc = host.active_document_handle();
        host.set_property(doc, "title", "Tower A");
        host.set_property(doc, "version_number", "2024");

        let descriptor = DocumentDescriptor::active(&host).unwrap();
        assert_eq!(descriptor.name().unwrap(), "Tower A");
        let snapshot = descriptor.serialized().unwrap();
        assert_eq!(snapshot.get("title").unwrap().as_text(), Some("Tower A"));
        assert!(snapshot.get("user_name").unwrap().is_unavailable());
    }

    #[test]
    fn test_untitled_document_has_empty_name() {
        let host = ScriptedHost::new();
        let descriptor = DocumentDescriptor::active(&host).unwrap();
        assert!(matches!(
            descriptor.name().unwrap_err(),
            AdapterError::EmptyName(_)
        ));
    }

    #[test]
    fn test_line_styles_enumeration() {
        let mut host = ScriptedHost::new();
        let thin = host.add_element(ElementKind::LineStyleCategory);
        let wide = host.add_element(ElementKind::LineStyleCategory);

        let descriptor = DocumentDescriptor::active(&host).unwrap();
        assert_eq!(descriptor.line_styles(), vec![thin, wide]);
    }

    #[test]
    fn test_wrong_kind_is_rejected() {
        let mut host = ScriptedHost::new();
        let room = host.add_element(ElementKind::Room);
        let err = DocumentDescriptor::new(&host, room)
            .map(|_| ())
            .unwrap_err();
        assert!(matches!(err, AdapterError::KindMismatch { .. }));
    }
}
