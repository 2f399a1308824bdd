// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host capability traits
//!
//! The host application owns all element lifetime, geometry storage, and
//! the transaction system. The adapter consumes it through these narrow
//! capability traits and nothing else: reads are side-effect free, and
//! every mutation assumes a caller-managed transaction is already active.
//!
//! The adapter is single-threaded and synchronous, so none of these
//! traits carry `Send`/`Sync` bounds; the host document is treated as
//! exclusively owned by the calling thread for the duration of a script
//! invocation.

use crate::{
    CardinalSlot, Curve, ElementId, ElementKind, EntityHandle, Line3, Point3, Result,
    SnapshotValue,
};

/// Element lookup, filtered collection, and selection snapshot
pub trait ElementStore {
    /// Get a handle by element ID
    ///
    /// # Returns
    /// The handle if the element exists, `None` otherwise
    fn get(&self, id: ElementId) -> Option<EntityHandle>;

    /// Whether the element behind a handle still exists
    ///
    /// A deleted element invalidates its handles; adapter operations on
    /// an invalidated handle fail with `StaleHandle`.
    fn is_valid(&self, handle: EntityHandle) -> bool;

    /// Handle for the open document itself
    fn active_document(&self) -> EntityHandle;

    /// Handle for the currently active view
    fn active_view(&self) -> EntityHandle;

    /// Collect all elements of one native kind
    ///
    /// Eagerly evaluated; ordering is host-collection order and is not
    /// guaranteed stable across host sessions.
    fn collect(&self, kind: ElementKind) -> Vec<EntityHandle>;

    /// Snapshot of the current interactive selection
    fn selection(&self) -> Vec<EntityHandle>;

    /// The view a viewport presents
    ///
    /// # Returns
    /// The referenced view's handle, or `None` if the viewport element
    /// no longer resolves to a view
    fn viewport_view(&self, viewport: EntityHandle) -> Option<EntityHandle>;
}

/// Read-only access to whitelisted element properties
pub trait PropertySource {
    /// Read one property of an element
    ///
    /// # Arguments
    /// * `handle` - The element to read from
    /// * `key` - Adapter-defined property key
    ///
    /// # Returns
    /// The property value, or `None` if the host cannot supply it
    fn property(&self, handle: EntityHandle, key: &str) -> Option<SnapshotValue>;
}

/// Read-only spatial queries against the host geometry kernel
///
/// All geometry is returned by value per call; the adapter never caches
/// native geometry across calls.
pub trait SpatialRead {
    /// The room's designated interior location point
    ///
    /// # Returns
    /// The stored location, or `None` for an unplaced room
    fn room_location(&self, room: EntityHandle) -> Option<Point3>;

    /// The room's footprint boundary curves
    ///
    /// # Returns
    /// The boundary curves in loop order, or `None` if the room has no
    /// computed boundary
    fn room_boundary(&self, room: EntityHandle) -> Option<Vec<Curve>>;

    /// Elements visible in a view, in host-collection order
    ///
    /// Does not apply crop or hide filtering; callers combine this with
    /// [`SpatialRead::footprint`] and [`SpatialRead::is_hidden_in_view`].
    fn visible_elements(&self, view: EntityHandle) -> Vec<EntityHandle>;

    /// An element's bounding footprint projected onto a view's plane
    ///
    /// # Returns
    /// The projected footprint polygon, or `None` if the element has no
    /// projectable geometry in that view
    fn footprint(&self, element: EntityHandle, view: EntityHandle) -> Option<Vec<Point3>>;

    /// The view's current crop boundary
    ///
    /// # Returns
    /// The crop boundary curves if cropping is active, `None` otherwise
    fn crop_boundary(&self, view: EntityHandle) -> Option<Vec<Curve>>;

    /// Whether a view-specific override hides the element in this view
    fn is_hidden_in_view(&self, element: EntityHandle, view: EntityHandle) -> bool;
}

/// Mutation commands against the host document
///
/// Transactions are owned by the caller: the adapter never opens or
/// closes one, it only requires one to be active. Per-command atomicity
/// is the host's transaction guarantee, not reimplemented here.
pub trait HostCommands {
    /// Whether a caller-managed transaction is currently active
    fn transaction_active(&self) -> bool;

    /// Create an elevation marker at a point
    ///
    /// The marker is created with four potential cardinal view slots,
    /// none of them materialized.
    ///
    /// # Arguments
    /// * `point` - Marker placement point
    /// * `view_type` - View family type for derived views
    /// * `scale` - View scale for derived views
    fn create_elevation_marker(
        &self,
        point: Point3,
        view_type: EntityHandle,
        scale: u32,
    ) -> Result<EntityHandle>;

    /// Materialize one cardinal slot of a marker into a view
    ///
    /// # Arguments
    /// * `marker` - The elevation marker
    /// * `active_view` - The view the marker is placed in
    /// * `slot` - Which cardinal slot to materialize
    fn create_elevation_view(
        &self,
        marker: EntityHandle,
        active_view: EntityHandle,
        slot: CardinalSlot,
    ) -> Result<EntityHandle>;

    /// Rotate an element about an axis line by a signed angle (radians)
    fn rotate_element(&self, handle: EntityHandle, axis: Line3, angle: f64) -> Result<()>;

    /// Assign a crop boundary to a view
    ///
    /// Assignment is all-or-nothing: on failure the view keeps its
    /// previous crop state.
    fn set_crop_shape(&self, view: EntityHandle, curves: &[Curve]) -> Result<()>;
}
