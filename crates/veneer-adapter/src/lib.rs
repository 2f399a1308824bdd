// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Veneer Adapter - Descriptors, extraction, and spatial workflows
//!
//! This crate is the working surface of the veneer adapter: it sits
//! between a CAD authoring application's in-memory document model and
//! script code, answering two questions — "what, structurally, is this
//! entity?" and "which entities satisfy this spatial predicate, and how
//! do I construct a new spatial region or orientation from inputs?"
//!
//! # Features
//!
//! - **Property extraction** into stable, diffable snapshots over fixed
//!   per-kind whitelists
//! - **Descriptor facades** for documents, families, line styles, rooms,
//!   and viewports
//! - **Selection/query facade** over the host's interactive selection
//!   and filtered collections
//! - **Elevation-orientation workflow** creating, rotating, and cropping
//!   multi-directional view markers inside caller-managed transactions
//!
//! # Example
//!
//! ```ignore
//! use veneer_adapter::Adapter;
//! use veneer_model::Host;
//!
//! let adapter = Adapter::new(host);
//! let room = adapter.room(adapter.single_selection()?)?;
//! println!("{}", room.serialized_json()?);
//! for handle in room.elements_in_room(host.elements().active_view())? {
//!     println!("in room: {handle}");
//! }
//! ```

pub mod descriptors;
pub mod elevation;
pub mod extractor;
pub mod selection;

#[cfg(test)]
pub(crate) mod fixture;

pub use descriptors::{
    DocumentDescriptor, FamilyDescriptor, LineStyleDescriptor, RoomDescriptor,
    ViewportDescriptor, ViewportElements,
};
pub use elevation::{
    CompletedElevation, CropFailure, CropOutcome, ElevationPlacement, OrientedElevation,
};
pub use extractor::{render_snapshot, snapshot, whitelist};
pub use selection::{collect, first_view_family_type, selection_prefix, single_selection};

use veneer_model::{CardinalSlot, Curve, ElementKind, EntityHandle, Host, Point3, Result};

/// Entry facade bundling a host reference with adapter constructors
///
/// Scripts typically build one of these per invocation and reach every
/// adapter operation through it.
pub struct Adapter<'a> {
    host: &'a dyn Host,
}

impl<'a> Adapter<'a> {
    /// Wrap a host boundary
    pub fn new(host: &'a dyn Host) -> Self {
        Self { host }
    }

    /// The wrapped host
    pub fn host(&self) -> &'a dyn Host {
        self.host
    }

    /// Descriptor for the open document
    pub fn document(&self) -> Result<DocumentDescriptor<'a>> {
        DocumentDescriptor::active(self.host)
    }

    /// Descriptor for a family handle
    pub fn family(&self, handle: EntityHandle) -> Result<FamilyDescriptor<'a>> {
        FamilyDescriptor::new(self.host, handle)
    }

    /// Descriptor for a line-style handle
    pub fn line_style(&self, handle: EntityHandle) -> Result<LineStyleDescriptor<'a>> {
        LineStyleDescriptor::new(self.host, handle)
    }

    /// Descriptor for a room handle
    pub fn room(&self, handle: EntityHandle) -> Result<RoomDescriptor<'a>> {
        RoomDescriptor::new(self.host, handle)
    }

    /// Descriptor for a viewport handle
    pub fn viewport(&self, handle: EntityHandle) -> Result<ViewportDescriptor<'a>> {
        ViewportDescriptor::new(self.host, handle)
    }

    /// The one currently selected element
    pub fn single_selection(&self) -> Result<EntityHandle> {
        selection::single_selection(self.host)
    }

    /// All elements of one native kind, in host-collection order
    pub fn collect(&self, kind: ElementKind) -> Vec<EntityHandle> {
        selection::collect(self.host, kind)
    }

    /// Start the elevation-orientation workflow
    ///
    /// Requires an active caller-managed transaction.
    pub fn place_elevation(
        &self,
        point: Point3,
        view_type: EntityHandle,
        scale: u32,
    ) -> Result<ElevationPlacement<'a>> {
        ElevationPlacement::create(self.host, point, view_type, scale)
    }

    /// Create, orient, and crop an elevation in one call
    ///
    /// Convenience composition of the three workflow steps; crop failure
    /// is reported through the outcome, not as an error.
    pub fn place_oriented_elevation(
        &self,
        point: Point3,
        view_type: EntityHandle,
        scale: u32,
        model_midpoint: Point3,
        slot: CardinalSlot,
        crop: &[Curve],
    ) -> Result<CropOutcome<'a>> {
        let oriented = self
            .place_elevation(point, view_type, scale)?
            .orient(model_midpoint, slot)?;
        Ok(oriented.assign_crop(crop))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::ScriptedHost;

    #[test]
    fn test_adapter_end_to_end_elevation() {
        let mut host = ScriptedHost::new();
        let vft = host.add_element(ElementKind::ViewFamilyType);
        host.begin_transaction();

        let adapter = Adapter::new(&host);
        let p = |x: f64, z: f64| Point3::new(x, 0.0, z);
        let crop = vec![
            Curve::new(p(0.0, 0.0), p(8.0, 0.0)),
            Curve::new(p(8.0, 0.0), p(8.0, 10.0)),
            Curve::new(p(8.0, 10.0), p(0.0, 10.0)),
            Curve::new(p(0.0, 10.0), p(0.0, 0.0)),
        ];
        let outcome = adapter
            .place_oriented_elevation(
                Point3::new(10.0, 10.0, 0.0),
                vft,
                100,
                Point3::new(20.0, 10.0, 0.0),
                CardinalSlot::Slot0,
                &crop,
            )
            .unwrap();
        assert!(outcome.is_assigned());
    }

    #[test]
    fn test_adapter_descriptor_constructors_check_kinds() {
        let mut host = ScriptedHost::new();
        let room = host.add_element(ElementKind::Room);
        let adapter = Adapter::new(&host);
        assert!(adapter.room(room).is_ok());
        assert!(adapter.family(room).is_err());
        assert!(adapter.viewport(room).is_err());
    }
}
