// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scripted in-memory host for tests
//!
//! Implements every capability trait over plain maps so descriptor,
//! extraction, selection, and workflow behavior can be exercised without
//! a real host process. Mutating commands are journaled, and rotation or
//! crop rejection can be injected to drive the failure paths.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use veneer_model::{
    AdapterError, CardinalSlot, Curve, ElementId, ElementKind, ElementStore, EntityHandle, Host,
    HostCommands, Line3, Point3, PropertySource, Result, SnapshotValue, SpatialRead,
};

pub(crate) struct ScriptedHost {
    elements: RefCell<HashMap<ElementId, EntityHandle>>,
    deleted: RefCell<HashSet<ElementId>>,
    properties: HashMap<ElementId, HashMap<String, SnapshotValue>>,
    selection: Vec<EntityHandle>,
    active_document: EntityHandle,
    active_view: EntityHandle,
    viewport_views: HashMap<ElementId, EntityHandle>,
    room_locations: HashMap<ElementId, Point3>,
    room_boundaries: HashMap<ElementId, Vec<Curve>>,
    visible: HashMap<ElementId, Vec<EntityHandle>>,
    footprints: HashMap<(ElementId, ElementId), Vec<Point3>>,
    crops: RefCell<HashMap<ElementId, Vec<Curve>>>,
    hidden: HashSet<(ElementId, ElementId)>,
    transaction: Cell<bool>,
    reject_rotation: Cell<bool>,
    reject_view_creation: Cell<bool>,
    reject_crop: Cell<bool>,
    next_id: Cell<u64>,
    journal: RefCell<Vec<String>>,
}

impl ScriptedHost {
    pub fn new() -> Self {
        let document = EntityHandle::new(1u64, ElementKind::Document);
        let view = EntityHandle::new(2u64, ElementKind::View);
        let mut elements = HashMap::new();
        elements.insert(document.id, document);
        elements.insert(view.id, view);
        Self {
            elements: RefCell::new(elements),
            deleted: RefCell::new(HashSet::new()),
            properties: HashMap::new(),
            selection: Vec::new(),
            active_document: document,
            active_view: view,
            viewport_views: HashMap::new(),
            room_locations: HashMap::new(),
            room_boundaries: HashMap::new(),
            visible: HashMap::new(),
            footprints: HashMap::new(),
            crops: RefCell::new(HashMap::new()),
            hidden: HashSet::new(),
            transaction: Cell::new(false),
            reject_rotation: Cell::new(false),
            reject_view_creation: Cell::new(false),
            reject_crop: Cell::new(false),
            next_id: Cell::new(100),
            journal: RefCell::new(Vec::new()),
        }
    }

    fn allocate(&self, kind: ElementKind) -> EntityHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let handle = EntityHandle::new(id, kind);
        self.elements.borrow_mut().insert(handle.id, handle);
        handle
    }

    pub fn add_element(&mut self, kind: ElementKind) -> EntityHandle {
        self.allocate(kind)
    }

    pub fn delete_element(&mut self, handle: EntityHandle) {
        self.deleted.borrow_mut().insert(handle.id);
    }

    pub fn active_document_handle(&self) -> EntityHandle {
        self.active_document
    }

    pub fn active_view_handle(&self) -> EntityHandle {
        self.active_view
    }

    pub fn set_property(
        &mut self,
        handle: EntityHandle,
        key: &str,
        value: impl Into<SnapshotValue>,
    ) {
        self.properties
            .entry(handle.id)
            .or_default()
            .insert(key.to_string(), value.into());
    }

    pub fn select(&mut self, handles: &[EntityHandle]) {
        self.selection = handles.to_vec();
    }

    pub fn link_viewport(&mut self, viewport: EntityHandle, view: EntityHandle) {
        self.viewport_views.insert(viewport.id, view);
    }

    pub fn set_room_location(&mut self, room: EntityHandle, point: Point3) {
        self.room_locations.insert(room.id, point);
    }

    pub fn set_room_boundary(&mut self, room: EntityHandle, curves: Vec<Curve>) {
        self.room_boundaries.insert(room.id, curves);
    }

    pub fn set_visible(&mut self, view: EntityHandle, handles: Vec<EntityHandle>) {
        self.visible.insert(view.id, handles);
    }

    pub fn set_footprint(&mut self, element: EntityHandle, view: EntityHandle, poly: Vec<Point3>) {
        self.footprints.insert((element.id, view.id), poly);
    }

    pub fn set_crop(&mut self, view: EntityHandle, curves: Vec<Curve>) {
        self.crops.borrow_mut().insert(view.id, curves);
    }

    pub fn crop_of(&self, view: EntityHandle) -> Option<Vec<Curve>> {
        self.crops.borrow().get(&view.id).cloned()
    }

    pub fn hide_in_view(&mut self, element: EntityHandle, view: EntityHandle) {
        self.hidden.insert((element.id, view.id));
    }

    pub fn begin_transaction(&self) {
        self.transaction.set(true);
    }

    pub fn reject_rotation(&self) {
        self.reject_rotation.set(true);
    }

    pub fn reject_view_creation(&self) {
        self.reject_view_creation.set(true);
    }

    pub fn reject_crop(&self) {
        self.reject_crop.set(true);
    }

    pub fn journal(&self) -> Vec<String> {
        self.journal.borrow().clone()
    }

    fn record(&self, entry: String) {
        self.journal.borrow_mut().push(entry);
    }
}

impl ElementStore for ScriptedHost {
    fn get(&self, id: ElementId) -> Option<EntityHandle> {
        if self.deleted.borrow().contains(&id) {
            return None;
        }
        self.elements.borrow().get(&id).copied()
    }

    fn is_valid(&self, handle: EntityHandle) -> bool {
        self.get(handle.id).is_some()
    }

    fn active_document(&self) -> EntityHandle {
        self.active_document
    }

    fn active_view(&self) -> EntityHandle {
        self.active_view
    }

    fn collect(&self, kind: ElementKind) -> Vec<EntityHandle> {
        let deleted = self.deleted.borrow();
        let mut handles: Vec<EntityHandle> = self
            .elements
            .borrow()
            .values()
            .filter(|h| h.kind == kind && !deleted.contains(&h.id))
            .copied()
            .collect();
        // Host-collection order: the fixture uses creation order.
        handles.sort_by_key(|h| h.id.0);
        handles
    }

    fn selection(&self) -> Vec<EntityHandle> {
        self.selection.clone()
    }

    fn viewport_view(&self, viewport: EntityHandle) -> Option<EntityHandle> {
        self.viewport_views.get(&viewport.id).copied()
    }
}

impl PropertySource for ScriptedHost {
    fn property(&self, handle: EntityHandle, key: &str) -> Option<SnapshotValue> {
        self.properties.get(&handle.id)?.get(key).cloned()
    }
}

impl SpatialRead for ScriptedHost {
    fn room_location(&self, room: EntityHandle) -> Option<Point3> {
        self.room_locations.get(&room.id).copied()
    }

    fn room_boundary(&self, room: EntityHandle) -> Option<Vec<Curve>> {
        self.room_boundaries.get(&room.id).cloned()
    }

    fn visible_elements(&self, view: EntityHandle) -> Vec<EntityHandle> {
        self.visible.get(&view.id).cloned().unwrap_or_default()
    }

    fn footprint(&self, element: EntityHandle, view: EntityHandle) -> Option<Vec<Point3>> {
        self.footprints.get(&(element.id, view.id)).cloned()
    }

    fn crop_boundary(&self, view: EntityHandle) -> Option<Vec<Curve>> {
        self.crops.borrow().get(&view.id).cloned()
    }

    fn is_hidden_in_view(&self, element: EntityHandle, view: EntityHandle) -> bool {
        self.hidden.contains(&(element.id, view.id))
    }
}

impl HostCommands for ScriptedHost {
    fn transaction_active(&self) -> bool {
        self.transaction.get()
    }

    fn create_elevation_marker(
        &self,
        point: Point3,
        view_type: EntityHandle,
        scale: u32,
    ) -> Result<EntityHandle> {
        let marker = self.allocate(ElementKind::ElevationMarker);
        self.record(format!(
            "create_marker {marker} at {point} type {view_type} scale {scale}"
        ));
        Ok(marker)
    }

    fn create_elevation_view(
        &self,
        marker: EntityHandle,
        active_view: EntityHandle,
        slot: CardinalSlot,
    ) -> Result<EntityHandle> {
        if self.reject_view_creation.get() {
            return Err(AdapterError::rejected(
                "create_elevation_view",
                "slot already materialized",
            ));
        }
        let view = self.allocate(ElementKind::View);
        self.record(format!(
            "create_view {view} on {marker} in {active_view} {slot}"
        ));
        Ok(view)
    }

    fn rotate_element(&self, handle: EntityHandle, axis: Line3, angle: f64) -> Result<()> {
        if self.reject_rotation.get() {
            return Err(AdapterError::rejected("rotate_element", "element is pinned"));
        }
        self.record(format!(
            "rotate {handle} about {} by {angle:.6}",
            axis.origin
        ));
        Ok(())
    }

    fn set_crop_shape(&self, view: EntityHandle, curves: &[Curve]) -> Result<()> {
        if self.reject_crop.get() {
            return Err(AdapterError::rejected(
                "set_crop_shape",
                "loop self-intersects after projection",
            ));
        }
        self.crops.borrow_mut().insert(view.id, curves.to_vec());
        self.record(format!("set_crop {view} ({} curves)", curves.len()));
        Ok(())
    }
}

impl Host for ScriptedHost {
    fn elements(&self) -> &dyn ElementStore {
        self
    }

    fn properties(&self) -> &dyn PropertySource {
        self
    }

    fn spatial(&self) -> &dyn SpatialRead {
        self
    }

    fn commands(&self) -> &dyn HostCommands {
        self
    }
}
