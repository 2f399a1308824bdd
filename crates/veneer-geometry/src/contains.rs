// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Point-in-region containment
//!
//! Planar even-odd test on the boundary projected to its own plane.
//! The boundary edge counts as inside (inclusive).

use crate::boundary::{to_na, RegionBoundary, GEOM_TOL};
use nalgebra::{Point2 as NaPoint2, Vector3};
use veneer_model::Point3;

impl RegionBoundary {
    /// Test whether a point lies inside the region
    ///
    /// The point is projected onto the boundary plane first, so the
    /// vertical offset of a footprint vertex above a room floor does not
    /// affect the answer. A point exactly on a boundary edge is inside.
    pub fn contains(&self, point: Point3) -> bool {
        let normal = self.plane_normal();
        let (u, v) = plane_basis(normal);
        let origin = to_na(self.vertices()[0]);

        let project = |p: Point3| {
            let d = to_na(p) - origin;
            NaPoint2::new(d.dot(&u), d.dot(&v))
        };

        let p = project(point);
        let loop2d: Vec<NaPoint2<f64>> =
            self.vertices().iter().map(|vtx| project(*vtx)).collect();

        // Inclusive edge test first, then even-odd crossing count.
        for i in 0..loop2d.len() {
            if on_segment(p, loop2d[i], loop2d[(i + 1) % loop2d.len()]) {
                return true;
            }
        }
        crossing_count(p, &loop2d) % 2 == 1
    }
}

/// Test whether a point lies inside a region boundary
///
/// Free-function form of [`RegionBoundary::contains`].
pub fn point_in_region(point: Point3, boundary: &RegionBoundary) -> bool {
    boundary.contains(point)
}

/// Orthonormal in-plane basis for a unit normal
fn plane_basis(normal: &Vector3<f64>) -> (Vector3<f64>, Vector3<f64>) {
    let helper = if normal.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    let u = normal.cross(&helper).normalize();
    let v = normal.cross(&u);
    (u, v)
}

/// Whether `p` lies on segment `a`-`b` within tolerance
fn on_segment(p: NaPoint2<f64>, a: NaPoint2<f64>, b: NaPoint2<f64>) -> bool {
    let ab = b - a;
    let ap = p - a;
    let len_sq = ab.norm_squared();
    if len_sq < GEOM_TOL * GEOM_TOL {
        return ap.norm() <= GEOM_TOL;
    }
    let t = ap.dot(&ab) / len_sq;
    if !(-GEOM_TOL..=1.0 + GEOM_TOL).contains(&t) {
        return false;
    }
    let closest = a + ab * t.clamp(0.0, 1.0);
    (p - closest).norm() <= GEOM_TOL
}

/// Ray-crossing count for the even-odd rule (ray toward +u)
fn crossing_count(p: NaPoint2<f64>, loop2d: &[NaPoint2<f64>]) -> usize {
    let mut crossings = 0;
    for i in 0..loop2d.len() {
        let a = loop2d[i];
        let b = loop2d[(i + 1) % loop2d.len()];
        if (a.y > p.y) != (b.y > p.y) {
            let x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if x > p.x {
                crossings += 1;
            }
        }
    }
    crossings
}
