// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for addressing host document elements
//!
//! This module defines the fundamental value types used throughout the
//! adapter: element identity, capability tags, handles, and the small
//! geometric values exchanged with the host.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe element identifier
///
/// Wraps the host-assigned element ID. Identity is stable within a
/// document session; it is not guaranteed stable across sessions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for ElementId {
    fn from(id: u64) -> Self {
        ElementId(id)
    }
}

impl From<ElementId> for u64 {
    fn from(id: ElementId) -> Self {
        id.0
    }
}

/// Capability tag identifying the native kind of a document element
///
/// The adapter never discovers types dynamically; every handle carries
/// one of these tags and all dispatch happens on it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementKind {
    /// The document itself
    Document,
    /// A loadable family definition
    Family,
    /// A line-style category (a document setting, not a model element)
    LineStyleCategory,
    /// A placed room
    Room,
    /// A viewport placed on a sheet
    Viewport,
    /// A multi-directional elevation view marker
    ElevationMarker,
    /// A view (plan, elevation, section, ...)
    View,
    /// A view family type (used when materializing elevation views)
    ViewFamilyType,
    /// Generic model content returned by containment queries
    ModelElement,
}

impl ElementKind {
    /// Get display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            ElementKind::Document => "Document",
            ElementKind::Family => "Family",
            ElementKind::LineStyleCategory => "Line Style",
            ElementKind::Room => "Room",
            ElementKind::Viewport => "Viewport",
            ElementKind::ElevationMarker => "Elevation Marker",
            ElementKind::View => "View",
            ElementKind::ViewFamilyType => "View Family Type",
            ElementKind::ModelElement => "Model Element",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Opaque reference to one native document element
///
/// A handle is identity plus capability tag and nothing else. It is
/// immutable once obtained; if the underlying element is deleted by the
/// host, operations on the handle fail with `StaleHandle` rather than
/// observing partial state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct EntityHandle {
    /// Host-assigned element identity
    pub id: ElementId,
    /// Native kind of the referenced element
    pub kind: ElementKind,
}

impl EntityHandle {
    /// Create a new handle
    pub fn new(id: impl Into<ElementId>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    /// Element identity
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Capability tag
    pub fn kind(&self) -> ElementKind {
        self.kind
    }
}

impl fmt::Display for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind.display_name(), self.id)
    }
}

/// A 3D point in document coordinates
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// Create a new point
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A bounded boundary curve described by its endpoints
///
/// Region boundaries are assembled from four of these; the adapter only
/// ever needs endpoint coincidence and coplanarity, so the interior
/// parametrization stays with the host.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Curve {
    pub start: Point3,
    pub end: Point3,
}

impl Curve {
    /// Create a new bounded curve
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }
}

/// A bounded axis line, used for rotation commands
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Line3 {
    /// Start of the axis
    pub origin: Point3,
    /// End of the axis; direction is origin -> end
    pub end: Point3,
}

impl Line3 {
    /// Create a new bounded axis line
    pub fn new(origin: Point3, end: Point3) -> Self {
        Self { origin, end }
    }
}

/// One of the four cardinal view slots on an elevation marker
///
/// A marker is created with four potential slots (indices 0-3); a
/// workflow step may materialize any of them into an actual view.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CardinalSlot {
    Slot0,
    Slot1,
    Slot2,
    Slot3,
}

impl CardinalSlot {
    /// All four slots in index order
    pub const ALL: [CardinalSlot; 4] = [
        CardinalSlot::Slot0,
        CardinalSlot::Slot1,
        CardinalSlot::Slot2,
        CardinalSlot::Slot3,
    ];

    /// Build from a raw index (0-3)
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(CardinalSlot::Slot0),
            1 => Some(CardinalSlot::Slot1),
            2 => Some(CardinalSlot::Slot2),
            3 => Some(CardinalSlot::Slot3),
            _ => None,
        }
    }

    /// Raw slot index (0-3)
    pub fn index(&self) -> u8 {
        match self {
            CardinalSlot::Slot0 => 0,
            CardinalSlot::Slot1 => 1,
            CardinalSlot::Slot2 => 2,
            CardinalSlot::Slot3 => 3,
        }
    }
}

impl fmt::Display for CardinalSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_id_display() {
        assert_eq!(ElementId(42).to_string(), "#42");
    }

    #[test]
    fn test_handle_display() {
        let handle = EntityHandle::new(7u64, ElementKind::Room);
        assert_eq!(handle.to_string(), "Room(#7)");
    }

    #[test]
    fn test_cardinal_slot_round_trip() {
        for slot in CardinalSlot::ALL {
            assert_eq!(CardinalSlot::from_index(slot.index()), Some(slot));
        }
        assert_eq!(CardinalSlot::from_index(4), None);
    }
}
