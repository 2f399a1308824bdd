// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Viewport descriptor
//!
//! A viewport presents a view on a sheet. The descriptor resolves the
//! referenced view and streams the elements that actually appear through
//! the viewport: visible in the view, not hidden by a view-specific
//! override, and inside the crop region when cropping is active.

use super::{cached_snapshot, check_handle, display_name, footprint_overlaps};
use crate::extractor::render_snapshot;
use std::cell::OnceCell;
use std::vec::IntoIter;
use veneer_geometry::RegionBoundary;
use veneer_model::{
    AdapterError, ElementKind, EntityHandle, Host, Result, Snapshot,
};

/// Typed facade over a sheet viewport
pub struct ViewportDescriptor<'a> {
    host: &'a dyn Host,
    handle: EntityHandle,
    snapshot: OnceCell<Snapshot>,
}

impl<'a> ViewportDescriptor<'a> {
    /// Wrap a viewport handle
    pub fn new(host: &'a dyn Host, handle: EntityHandle) -> Result<Self> {
        check_handle(host, handle, ElementKind::Viewport, "viewport descriptor")?;
        Ok(Self {
            host,
            handle,
            snapshot: OnceCell::new(),
        })
    }

    /// The wrapped handle
    pub fn handle(&self) -> EntityHandle {
        self.handle
    }

    /// Display name of the referenced view
    pub fn name(&self) -> Result<String> {
        let view = self.view()?;
        display_name(self.host, view, "name")
    }

    /// Handle of the view this viewport presents
    pub fn view(&self) -> Result<EntityHandle> {
        self.host
            .elements()
            .viewport_view(self.handle)
            .ok_or_else(|| AdapterError::stale(self.handle, "viewport view"))
    }

    /// Serialized snapshot, extracted on first access
    pub fn serialized(&self) -> Result<&Snapshot> {
        cached_snapshot(&self.snapshot, self.host, self.handle)
    }

    /// Snapshot rendered as pretty JSON
    pub fn serialized_json(&self) -> Result<String> {
        render_snapshot(self.serialized()?)
    }

    /// Stream the elements appearing through this viewport
    ///
    /// Produces a lazy, finite, non-restartable sequence: candidates are
    /// snapshotted from the host eagerly (host-collection order), but
    /// crop and hide filtering happens as the sequence is consumed.
    /// When cropping is active, an element whose footprint lies wholly
    /// outside the crop region is excluded; an element with no
    /// projectable footprint is passed through on the host's visibility
    /// verdict alone.
    pub fn elements_in_viewport(&self) -> Result<ViewportElements<'a>> {
        let view = self.view()?;
        let crop = match self.host.spatial().crop_boundary(view) {
            Some(curves) => Some(RegionBoundary::from_curves(&curves)?),
            None => None,
        };
        Ok(ViewportElements {
            host: self.host,
            view,
            crop,
            candidates: self.host.spatial().visible_elements(view).into_iter(),
        })
    }
}

/// Lazy sequence of elements appearing through a viewport
///
/// Finite and non-restartable; obtain a fresh sequence from
/// [`ViewportDescriptor::elements_in_viewport`] to iterate again.
pub struct ViewportElements<'a> {
    host: &'a dyn Host,
    view: EntityHandle,
    crop: Option<RegionBoundary>,
    candidates: IntoIter<EntityHandle>,
}

impl Iterator for ViewportElements<'_> {
    type Item = EntityHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let spatial = self.host.spatial();
        for candidate in self.candidates.by_ref() {
            if spatial.is_hidden_in_view(candidate, self.view) {
                continue;
            }
            if let Some(region) = &self.crop {
                if let Some(footprint) = spatial.footprint(candidate, self.view) {
                    if !footprint_overlaps(region, &footprint) {
                        continue;
                    }
                }
            }
            return Some(candidate);
        }
        None
    }
}
