// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property extraction into canonical snapshots
//!
//! Each element kind owns an explicit, versioned whitelist of extractable
//! keys. Extraction never walks the native object graph reflectively:
//! the whitelist bounds cost and keeps snapshots stable across host
//! library versions that add unrelated properties.
//!
//! A property the host cannot supply is recorded under its key as the
//! explicit unavailable marker; the rest of the snapshot still extracts.

use veneer_model::{AdapterError, ElementKind, EntityHandle, Host, Result, Snapshot, SnapshotValue};

/// Document snapshot keys, in extraction order
pub const DOCUMENT_KEYS: &[&str] = &[
    "title",
    "application",
    "version_number",
    "version_name",
    "version_build",
    "user_name",
    "active_view",
    "path",
    "external_references",
];

/// Family snapshot keys, in extraction order
pub const FAMILY_KEYS: &[&str] = &[
    "name",
    "category",
    "creator",
    "file_size",
    "types_count",
    "placed_instances_count",
    "parameter_values",
];

/// Line-style snapshot keys, in extraction order
pub const LINE_STYLE_KEYS: &[&str] = &[
    "name",
    "weight",
    "rgb",
    "pattern_id",
    "pattern_name",
    "pattern_segment_lengths",
    "pattern_segment_types",
];

/// Room snapshot keys, in extraction order
pub const ROOM_KEYS: &[&str] = &["name", "number", "level", "area", "location"];

/// Viewport snapshot keys, in extraction order
pub const VIEWPORT_KEYS: &[&str] = &[
    "name",
    "view_id",
    "owner_view_id",
    "view_name",
    "view_template",
    "title_on_sheet",
    "view_scale",
    "view_type",
    "view_detail_level",
];

/// Whitelisted keys for a kind
///
/// Kinds without a descriptor facade carry an identity-only snapshot
/// (no whitelisted host properties).
pub fn whitelist(kind: ElementKind) -> &'static [&'static str] {
    match kind {
        ElementKind::Document => DOCUMENT_KEYS,
        ElementKind::Family => FAMILY_KEYS,
        ElementKind::LineStyleCategory => LINE_STYLE_KEYS,
        ElementKind::Room => ROOM_KEYS,
        ElementKind::Viewport => VIEWPORT_KEYS,
        _ => &[],
    }
}

/// Take a snapshot of an entity's whitelisted properties
///
/// Identity (`element_id`, `kind`) is always emitted first, derived from
/// the handle itself. Every whitelisted key follows in fixed order; a
/// per-key host failure becomes the unavailable marker under that key.
///
/// Read-only against the host. Two calls against an unmutated entity
/// yield structurally equal snapshots.
///
/// # Returns
/// The snapshot, or `StaleHandle` if the element was deleted
pub fn snapshot(host: &dyn Host, handle: EntityHandle) -> Result<Snapshot> {
    if !host.elements().is_valid(handle) {
        return Err(AdapterError::stale(handle, "snapshot"));
    }

    let mut snapshot = Snapshot::new();
    snapshot.insert("element_id", handle.id.0 as i64);
    snapshot.insert("kind", handle.kind.display_name());
    for key in whitelist(handle.kind) {
        let value = host
            .properties()
            .property(handle, key)
            .unwrap_or(SnapshotValue::Unavailable);
        snapshot.insert(*key, value);
    }
    Ok(snapshot)
}

/// Render a snapshot as pretty-printed JSON
///
/// The report surface scripts print and diff.
pub fn render_snapshot(snapshot: &Snapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot).map_err(|e| AdapterError::other(e.to_string()))
}
