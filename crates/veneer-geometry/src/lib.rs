// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Veneer Geometry
//!
//! Pure geometry utilities for the veneer adapter: orientation angles,
//! region-boundary assembly and validation, and point-in-region
//! containment. Everything here is a pure function over values supplied
//! per call; no host geometry is cached.
//!
//! ## Overview
//!
//! - **Orientation**: signed azimuth between two points, used to turn an
//!   elevation marker toward a model midpoint
//! - **Region boundaries**: validated, closed, planar 4-curve loops used
//!   for room footprints and crop assignment
//! - **Containment**: inclusive planar point-in-polygon testing
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use veneer_geometry::{orientation_angle, RegionBoundary};
//! use veneer_model::{Curve, Point3};
//!
//! let angle = orientation_angle(origin, target)?;
//! let region = RegionBoundary::from_curves(&curves)?;
//! assert!(region.contains(room_location));
//! ```

pub mod boundary;
pub mod contains;
pub mod orientation;

// Re-export main types
pub use boundary::RegionBoundary;
pub use contains::point_in_region;
pub use orientation::{orientation_angle, vertical_axis_through};
