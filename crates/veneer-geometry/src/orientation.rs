// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Orientation angle computation
//!
//! An orientation angle is a signed azimuth in radians, right-handed,
//! measured in the plane perpendicular to the vertical axis. It is a
//! derived value computed per call, never stored state.

use veneer_model::{AdapterError, Line3, Point3, Result};

/// Displacements below this are treated as degenerate
const ANGLE_EPS: f64 = 1e-12;

/// Compute the azimuth from `origin` toward `target`
///
/// Uses the signed arctangent of the displacement's two in-plane
/// components; the vertical component is ignored.
///
/// # Returns
/// The angle in radians in `(-pi, pi]`, or `UndefinedAngle` when the
/// in-plane displacement is degenerate (coincident points). Defaulting a
/// degenerate input to 0 is the caller's decision, not made here.
pub fn orientation_angle(origin: Point3, target: Point3) -> Result<f64> {
    let dx = target.x - origin.x;
    let dy = target.y - origin.y;
    if dx.hypot(dy) < ANGLE_EPS {
        return Err(AdapterError::UndefinedAngle);
    }
    Ok(dy.atan2(dx))
}

/// Bounded vertical axis line through a point
///
/// Rotation commands take a bounded axis; the extent is arbitrary as
/// long as it is nonzero.
pub fn vertical_axis_through(point: Point3) -> Line3 {
    Line3::new(point, Point3::new(point.x, point.y, point.z + 1.0))
}
