// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Umbrella host trait
//!
//! Bundles the four capability traits behind one object so descriptors
//! and workflows can borrow a single `&dyn Host`.

use crate::{ElementStore, HostCommands, PropertySource, SpatialRead};

/// Complete host capability surface
///
/// Implemented by host bindings (and by test fixtures). Consumers reach
/// individual capabilities through the accessor methods rather than
/// depending on the concrete host type.
///
/// # Example
///
/// ```ignore
/// use veneer_model::{Host, ElementKind};
///
/// fn count_families(host: &dyn Host) -> usize {
///     host.elements().collect(ElementKind::Family).len()
/// }
/// ```
pub trait Host {
    /// Element lookup, collection, and selection
    fn elements(&self) -> &dyn ElementStore;

    /// Whitelisted property reads
    fn properties(&self) -> &dyn PropertySource;

    /// Spatial queries (locations, boundaries, footprints, crops)
    fn spatial(&self) -> &dyn SpatialRead;

    /// Mutation commands and transaction status
    fn commands(&self) -> &dyn HostCommands;
}
