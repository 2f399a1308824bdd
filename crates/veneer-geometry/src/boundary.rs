// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Region boundary assembly and validation
//!
//! A region boundary is an ordered, closed loop of exactly four planar
//! boundary curves. It backs both room footprints and crop-region
//! assignment. Construction validates every invariant up front; a
//! non-conforming input is rejected with the violated invariant, never
//! silently repaired.

use nalgebra::{Point3 as NaPoint3, Vector3};
use veneer_model::{BoundaryViolation, Curve, Point3, Result};

/// Coincidence/coplanarity tolerance in document units
pub(crate) const GEOM_TOL: f64 = 1e-6;

pub(crate) fn to_na(p: Point3) -> NaPoint3<f64> {
    NaPoint3::new(p.x, p.y, p.z)
}

/// Validated, closed, planar 4-curve loop
///
/// Value type: holds copies of the input curves plus the fitted plane,
/// no reference back to any host element.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionBoundary {
    curves: [Curve; 4],
    vertices: [Point3; 4],
    normal: Vector3<f64>,
}

impl RegionBoundary {
    /// Assemble a region boundary from four curves
    ///
    /// Validation order: curve count, closure (start of curve *i*
    /// coincides with end of curve *i-1*, mod 4), planarity (every loop
    /// vertex within tolerance of the Newell-fitted plane).
    ///
    /// # Returns
    /// The validated boundary, or `InvalidBoundary` naming the violated
    /// invariant.
    pub fn from_curves(curves: &[Curve]) -> Result<Self> {
        let curves: [Curve; 4] = curves
            .try_into()
            .map_err(|_| BoundaryViolation::WrongCurveCount {
                found: curves.len(),
            })?;

        for i in 0..4 {
            let prev_end = to_na(curves[(i + 3) % 4].end);
            let start = to_na(curves[i].start);
            if (start - prev_end).norm() > GEOM_TOL {
                return Err(BoundaryViolation::NotClosed { segment: i }.into());
            }
        }

        let vertices = [
            curves[0].start,
            curves[1].start,
            curves[2].start,
            curves[3].start,
        ];
        let normal = newell_normal(&vertices);
        if normal.norm() < GEOM_TOL {
            // Zero-area loop: no plane to fit.
            return Err(BoundaryViolation::NotPlanar { deviation: 0.0 }.into());
        }
        let normal = normal.normalize();

        let centroid = centroid(&vertices);
        let deviation = vertices
            .iter()
            .map(|v| ((to_na(*v) - centroid).dot(&normal)).abs())
            .fold(0.0f64, f64::max);
        if deviation > GEOM_TOL {
            return Err(BoundaryViolation::NotPlanar { deviation }.into());
        }

        Ok(Self {
            curves,
            vertices,
            normal,
        })
    }

    /// The four boundary curves in loop order
    pub fn curves(&self) -> &[Curve; 4] {
        &self.curves
    }

    /// The four loop corner points (curve start points)
    pub fn vertices(&self) -> &[Point3; 4] {
        &self.vertices
    }

    /// Unit normal of the boundary plane
    pub fn normal(&self) -> [f64; 3] {
        [self.normal.x, self.normal.y, self.normal.z]
    }

    /// Centroid of the loop corner points
    pub fn centroid(&self) -> Point3 {
        let c = centroid(&self.vertices);
        Point3::new(c.x, c.y, c.z)
    }

    pub(crate) fn plane_normal(&self) -> &Vector3<f64> {
        &self.normal
    }
}

/// Newell's method normal (unnormalized) over a vertex loop
fn newell_normal(vertices: &[Point3]) -> Vector3<f64> {
    let mut n = Vector3::zeros();
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[(i + 1) % vertices.len()];
        n.x += (a.y - b.y) * (a.z + b.z);
        n.y += (a.z - b.z) * (a.x + b.x);
        n.z += (a.x - b.x) * (a.y + b.y);
    }
    n
}

fn centroid(vertices: &[Point3]) -> NaPoint3<f64> {
    let mut c = Vector3::zeros();
    for v in vertices {
        c += to_na(*v).coords;
    }
    NaPoint3::from(c / vertices.len() as f64)
}
