// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Selection and filtered-collection facade
//!
//! Thin pass-through to the host: interactive selection snapshots and
//! eager filtered queries by native kind. Ordering of collection results
//! is host-collection order and is not guaranteed stable across host
//! sessions.

use veneer_model::{AdapterError, ElementKind, EntityHandle, Host, Result};

/// The one currently selected element
///
/// The caller must pre-constrain selection to exactly one element.
///
/// # Returns
/// The selected handle, `NoSelection` if nothing is selected, or
/// `AmbiguousSelection` if more than one element is selected
pub fn single_selection(host: &dyn Host) -> Result<EntityHandle> {
    let selection = host.elements().selection();
    match selection.len() {
        0 => Err(AdapterError::NoSelection),
        1 => Ok(selection[0]),
        count => Err(AdapterError::AmbiguousSelection { count }),
    }
}

/// First `limit` elements of the user's selection, in selection order
pub fn selection_prefix(host: &dyn Host, limit: usize) -> Vec<EntityHandle> {
    let mut selection = host.elements().selection();
    selection.truncate(limit);
    selection
}

/// All elements of one native kind
///
/// Eagerly evaluated filtered collection query.
pub fn collect(host: &dyn Host, kind: ElementKind) -> Vec<EntityHandle> {
    host.elements().collect(kind)
}

/// First view family type in the document
///
/// Elevation workflows need a view family type to materialize views
/// from; scripts conventionally take the first one the host lists.
pub fn first_view_family_type(host: &dyn Host) -> Result<EntityHandle> {
    collect(host, ElementKind::ViewFamilyType)
        .into_iter()
        .next()
        .ok_or_else(|| AdapterError::other("document has no view family type"))
}
