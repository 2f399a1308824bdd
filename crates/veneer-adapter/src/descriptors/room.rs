// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room descriptor
//!
//! Adds the room's location point, its footprint boundary, and the
//! room-containment query over elements visible in a view.

use super::{cached_snapshot, check_handle, display_name, footprint_overlaps};
use crate::extractor::render_snapshot;
use std::cell::OnceCell;
use veneer_geometry::RegionBoundary;
use veneer_model::{
    AdapterError, ElementKind, EntityHandle, Host, Point3, Result, Snapshot,
};

/// Typed facade over a placed room
pub struct RoomDescriptor<'a> {
    host: &'a dyn Host,
    handle: EntityHandle,
    snapshot: OnceCell<Snapshot>,
}

impl<'a> RoomDescriptor<'a> {
    /// Wrap a room handle
    pub fn new(host: &'a dyn Host, handle: EntityHandle) -> Result<Self> {
        check_handle(host, handle, ElementKind::Room, "room descriptor")?;
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

    /// Room display name
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

    /// The room's designated interior location point
    ///
    /// # Returns
    /// The stored location, or `NoLocation` for an unplaced room
    pub fn location(&self) -> Result<Point3> {
        if !self.host.elements().is_valid(self.handle) {
            return Err(AdapterError::stale(self.handle, "room location"));
        }
        self.host
            .spatial()
            .room_location(self.handle)
            .ok_or(AdapterError::NoLocation(self.handle))
    }

    /// The room's footprint as a validated region boundary
    pub fn boundary(&self) -> Result<RegionBoundary> {
        let curves = self
            .host
            .spatial()
            .room_boundary(self.handle)
            .ok_or_else(|| {
                AdapterError::other(format!("room {} has no computed boundary", self.handle))
            })?;
        RegionBoundary::from_curves(&curves)
    }

    /// Elements visible in `view` whose projected footprint intersects
    /// the room's boundary polygon
    ///
    /// Results keep the insertion order of the host's underlying
    /// collection. Elements with no projectable geometry in `view` are
    /// excluded, not errored. The room itself is never a result.
    pub fn elements_in_room(&self, view: EntityHandle) -> Result<Vec<EntityHandle>> {
        let region = self.boundary()?;
        let spatial = self.host.spatial();
        let mut contained = Vec::new();
        for candidate in spatial.visible_elements(view) {
            if candidate == self.handle {
                continue;
            }
            let Some(footprint) = spatial.footprint(candidate, view) else {
                continue;
            };
            if footprint_overlaps(&region, &footprint) {
                contained.push(candidate);
            }
        }
        Ok(contained)
    }
}
