// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Elevation-orientation workflow
//!
//! Creates a multi-directional elevation marker, turns it toward a model
//! midpoint, materializes one cardinal slot into a view, and assigns a
//! custom crop boundary to that view.
//!
//! The states are encoded in the types: [`ElevationPlacement`] (created)
//! consumes itself into [`OrientedElevation`] (oriented), which consumes
//! itself into a [`CropOutcome`]. Rotation and slot-materialization
//! failures are fatal to the instance; the caller's transaction rollback
//! removes the partial marker. Crop failures are terminal but
//! recoverable: the oriented marker and its view stay valid and are
//! handed back inside the outcome.
//!
//! Every mutating step requires a caller-managed transaction to be
//! active; the workflow never opens or closes one.

use log::{debug, warn};
use veneer_geometry::{orientation_angle, vertical_axis_through, RegionBoundary};
use veneer_model::{
    AdapterError, BoundaryViolation, CardinalSlot, Curve, ElementKind, EntityHandle, Host, Point3,
    Result,
};

/// A freshly created elevation marker (state: created)
///
/// Four potential cardinal view slots, none materialized yet.
pub struct ElevationPlacement<'a> {
    host: &'a dyn Host,
    marker: EntityHandle,
    point: Point3,
}

impl<'a> ElevationPlacement<'a> {
    /// Create an elevation marker at a point
    ///
    /// # Arguments
    /// * `point` - Marker placement point
    /// * `view_type` - A view family type handle for the derived views
    /// * `scale` - View scale for the derived views
    ///
    /// # Returns
    /// The placement, or `NoActiveTransaction` / `KindMismatch` /
    /// `HostRejected` on failure
    pub fn create(
        host: &'a dyn Host,
        point: Point3,
        view_type: EntityHandle,
        scale: u32,
    ) -> Result<Self> {
        if !host.commands().transaction_active() {
            return Err(AdapterError::no_transaction("create_elevation_marker"));
        }
        if view_type.kind != ElementKind::ViewFamilyType {
            return Err(AdapterError::kind_mismatch(
                view_type,
                ElementKind::ViewFamilyType,
            ));
        }
        let marker = host
            .commands()
            .create_elevation_marker(point, view_type, scale)?;
        debug!("created elevation marker {marker} at {point}");
        Ok(Self {
            host,
            marker,
            point,
        })
    }

    /// The marker handle
    pub fn marker(&self) -> EntityHandle {
        self.marker
    }

    /// The placement point
    pub fn point(&self) -> Point3 {
        self.point
    }

    /// Orient the marker toward a model midpoint and materialize a slot
    ///
    /// Computes the azimuth from the placement point toward
    /// `model_midpoint`; a degenerate midpoint yields `UndefinedAngle`
    /// and the caller decides whether to retry with
    /// [`ElevationPlacement::orient_at`] and an explicit angle.
    pub fn orient(
        self,
        model_midpoint: Point3,
        slot: CardinalSlot,
    ) -> Result<OrientedElevation<'a>> {
        let angle = orientation_angle(self.point, model_midpoint)?;
        self.orient_at(angle, slot)
    }

    /// Orient the marker by an explicit angle and materialize a slot
    ///
    /// Rotates the marker about the vertical axis through the placement
    /// point, then materializes exactly the given cardinal slot. Either
    /// command failing is fatal to the workflow instance: no partially
    /// oriented marker is handed back, cleanup is the caller's
    /// transaction rollback.
    pub fn orient_at(self, angle: f64, slot: CardinalSlot) -> Result<OrientedElevation<'a>> {
        if !self.host.commands().transaction_active() {
            return Err(AdapterError::no_transaction("orient_elevation"));
        }
        let axis = vertical_axis_through(self.point);
        self.host
            .commands()
            .rotate_element(self.marker, axis, angle)?;
        let view = self.host.commands().create_elevation_view(
            self.marker,
            self.host.elements().active_view(),
            slot,
        )?;
        debug!(
            "oriented elevation marker {} by {angle:.4} rad, materialized {slot} as {view}",
            self.marker
        );
        Ok(OrientedElevation {
            host: self.host,
            marker: self.marker,
            point: self.point,
            view,
            angle,
        })
    }
}

/// An oriented elevation with one materialized view (state: oriented)
pub struct OrientedElevation<'a> {
    host: &'a dyn Host,
    marker: EntityHandle,
    point: Point3,
    view: EntityHandle,
    angle: f64,
}

impl<'a> OrientedElevation<'a> {
    /// The marker handle
    pub fn marker(&self) -> EntityHandle {
        self.marker
    }

    /// The materialized view handle
    pub fn view(&self) -> EntityHandle {
        self.view
    }

    /// The applied orientation angle in radians
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The placement point
    pub fn point(&self) -> Point3 {
        self.point
    }

    /// Assign a custom crop boundary to the materialized view
    ///
    /// The boundary is validated before any host call, and assignment is
    /// all-or-nothing: on any failure the view keeps its previous crop
    /// state and the oriented elevation comes back inside the outcome,
    /// still valid and usable without a custom crop.
    pub fn assign_crop(self, curves: &[Curve]) -> CropOutcome<'a> {
        if !self.host.commands().transaction_active() {
            warn!("crop assignment for {} outside a transaction", self.view);
            return CropOutcome::Failed {
                elevation: self,
                failure: CropFailure::NoActiveTransaction,
            };
        }
        let region = match RegionBoundary::from_curves(curves) {
            Ok(region) => region,
            Err(AdapterError::InvalidBoundary(violation)) => {
                warn!("crop boundary for {} rejected: {violation}", self.view);
                return CropOutcome::Failed {
                    elevation: self,
                    failure: CropFailure::InvalidBoundary(violation),
                };
            }
            // RegionBoundary construction only fails with InvalidBoundary.
            Err(other) => {
                return CropOutcome::Failed {
                    elevation: self,
                    failure: CropFailure::HostRejected(other.to_string()),
                };
            }
        };
        if let Err(err) = self
            .host
            .commands()
            .set_crop_shape(self.view, region.curves())
        {
            warn!("host rejected crop for {}: {err}", self.view);
            return CropOutcome::Failed {
                elevation: self,
                failure: CropFailure::HostRejected(err.to_string()),
            };
        }
        debug!("assigned custom crop to {}", self.view);
        CropOutcome::Assigned(CompletedElevation {
            marker: self.marker,
            view: self.view,
            angle: self.angle,
            region,
        })
    }
}

/// Terminal result of the crop-assignment step
pub enum CropOutcome<'a> {
    /// Crop applied; the workflow completed
    Assigned(CompletedElevation),
    /// Crop not applied; the oriented elevation remains usable
    Failed {
        elevation: OrientedElevation<'a>,
        failure: CropFailure,
    },
}

impl CropOutcome<'_> {
    /// Whether the crop was assigned
    pub fn is_assigned(&self) -> bool {
        matches!(self, CropOutcome::Assigned(_))
    }
}

/// Which failure family prevented crop assignment
#[derive(Debug, Clone, PartialEq)]
pub enum CropFailure {
    /// The supplied curves violated a boundary invariant (caught before
    /// any host call)
    InvalidBoundary(BoundaryViolation),
    /// The host declined the assignment (e.g. self-intersecting loop
    /// after projection)
    HostRejected(String),
    /// No caller-managed transaction was active; reported through the
    /// outcome so the oriented elevation is not lost
    NoActiveTransaction,
}

/// A fully placed, oriented, and cropped elevation (terminal state)
pub struct CompletedElevation {
    marker: EntityHandle,
    view: EntityHandle,
    angle: f64,
    region: RegionBoundary,
}

impl CompletedElevation {
    /// The marker handle
    pub fn marker(&self) -> EntityHandle {
        self.marker
    }

    /// The materialized view handle
    pub fn view(&self) -> EntityHandle {
        self.view
    }

    /// The applied orientation angle in radians
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The assigned crop boundary
    pub fn region(&self) -> &RegionBoundary {
        &self.region
    }
}
