// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Descriptor facades over entity handles
//!
//! A descriptor wraps one handle of a specific kind and adds the
//! serialization and query operations for that kind. Descriptors are
//! short-lived, scoped to one script invocation; the serialized snapshot
//! is computed lazily on first access and cached for the descriptor's
//! lifetime.

mod document;
mod family;
mod linestyle;
mod room;
mod viewport;

pub use document::DocumentDescriptor;
pub use family::FamilyDescriptor;
pub use linestyle::LineStyleDescriptor;
pub use room::RoomDescriptor;
pub use viewport::{ViewportDescriptor, ViewportElements};

use std::cell::OnceCell;
use veneer_geometry::RegionBoundary;
use veneer_model::{
    AdapterError, ElementKind, EntityHandle, Host, Point3, Result, Snapshot, SnapshotValue,
};

/// Validate a handle's capability tag and liveness for a descriptor
pub(crate) fn check_handle(
    host: &dyn Host,
    handle: EntityHandle,
    expected: ElementKind,
    operation: &'static str,
) -> Result<()> {
    if handle.kind != expected {
        return Err(AdapterError::kind_mismatch(handle, expected));
    }
    if !host.elements().is_valid(handle) {
        return Err(AdapterError::stale(handle, operation));
    }
    Ok(())
}

/// Lazily extract and cache a snapshot for a descriptor
pub(crate) fn cached_snapshot<'s>(
    cell: &'s OnceCell<Snapshot>,
    host: &dyn Host,
    handle: EntityHandle,
) -> Result<&'s Snapshot> {
    if let Some(snapshot) = cell.get() {
        return Ok(snapshot);
    }
    let snapshot = crate::extractor::snapshot(host, handle)?;
    Ok(cell.get_or_init(|| snapshot))
}

/// Read an element's display name from a snapshot-level property
///
/// # Returns
/// The non-blank name, or `EmptyName` if the host reports none
pub(crate) fn display_name(
    host: &dyn Host,
    handle: EntityHandle,
    key: &'static str,
) -> Result<String> {
    match host.properties().property(handle, key) {
        Some(SnapshotValue::Text(name)) if !name.trim().is_empty() => Ok(name),
        _ => Err(AdapterError::EmptyName(handle)),
    }
}

/// Footprint/region intersection policy
///
/// The host's native predicate is not observable from the adapter, so
/// overlap is approximated as: any footprint vertex inside the region,
/// the footprint centroid inside the region, or any region corner inside
/// the footprint's in-plane bounding rectangle (the case of a region
/// engulfed by a large footprint). Shared by the room-containment and
/// viewport-crop queries.
pub(crate) fn footprint_overlaps(region: &RegionBoundary, footprint: &[Point3]) -> bool {
    if footprint.is_empty() {
        return false;
    }
    if footprint.iter().any(|p| region.contains(*p)) {
        return true;
    }
    let n = footprint.len() as f64;
    let centroid = Point3::new(
        footprint.iter().map(|p| p.x).sum::<f64>() / n,
        footprint.iter().map(|p| p.y).sum::<f64>() / n,
        footprint.iter().map(|p| p.z).sum::<f64>() / n,
    );
    if region.contains(centroid) {
        return true;
    }
    region
        .vertices()
        .iter()
        .any(|corner| in_bounding_rect(*corner, footprint))
}

fn in_bounding_rect(point: Point3, footprint: &[Point3]) -> bool {
    let min_x = footprint.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max_x = footprint.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let min_y = footprint.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = footprint.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    (min_x..=max_x).contains(&point.x) && (min_y..=max_y).contains(&point.y)
}
