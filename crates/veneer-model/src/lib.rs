// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Veneer Model - Shared types and host capability traits
//!
//! This crate provides the core abstractions for the veneer adapter, a
//! thin library sitting between a CAD authoring application's document
//! object model and script code that wants stable serialized snapshots
//! and derived spatial operations.
//!
//! # Architecture
//!
//! The crate is organized around a few key pieces:
//!
//! - [`EntityHandle`] - Opaque, capability-tagged reference to one
//!   native document element
//! - [`Snapshot`] / [`SnapshotValue`] - Canonical, cycle-free nested
//!   values extracted from whitelisted properties
//! - [`AdapterError`] - The complete adapter error surface
//! - [`Host`] and its capability sub-traits ([`ElementStore`],
//!   [`PropertySource`], [`SpatialRead`], [`HostCommands`]) - the narrow
//!   boundary to the host application
//!
//! # Example
//!
//! ```ignore
//! use veneer_model::{ElementKind, Host};
//!
//! fn active_selection(host: &dyn Host) {
//!     for handle in host.elements().selection() {
//!         println!("selected: {handle}");
//!     }
//! }
//! ```

pub mod error;
pub mod host;
pub mod snapshot;
pub mod traits;
pub mod types;

// Re-export all public types
pub use error::*;
pub use host::*;
pub use snapshot::*;
pub use traits::*;
pub use types::*;
