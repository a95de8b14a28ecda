//! The workspace: composition root for every visualization concern.
//!
//! `Workspace` owns the node registry, viewport gestures, selection, edges,
//! association drawing, rubber-band selection, drag-and-drop, and sizing, and
//! routes host input to them. All geometry is read through [`Layout`] at the
//! moment it is needed. Handlers return the events the element dispatches,
//! in order; `scroll` and `zoomchange` are held back until
//! [`Workspace::flush_notifications`].

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use crate::alignment::{self, Alignment};
use crate::anchors::Side;
use crate::association::{AssociationAnchors, DrawOutcome, PreviewLine};
use crate::config::WorkspaceConfig;
use crate::debug::{DebugLabel, DebugLabels};
use crate::drag_drop::{DragAndDrop, DragPayload, DropOutcome, ExternalDrop, NoExternalDrop};
use crate::edges::{EdgeDescriptor, EdgeManager, EdgeRender};
use crate::events::{Event, PendingNotifications, SlotEndpoint};
use crate::geometry::{Point, Rect, Viewport, bounding_box_relative_to, to_workspace_point};
use crate::gestures::{Gestures, ViewportChange};
use crate::group_selection::GroupSelection;
use crate::input::{Button, Input, Key, Modifiers, Target, TouchPoint, WheelDelta};
use crate::layout::Layout;
use crate::nodes::{ElementDescriptor, NodeKey, NodeStore};
use crate::routing;
use crate::selection::SelectionManager;
use crate::sizing::WorkspaceSizing;

/// Workspace-space box of `key`, read live from the layout. Keys the node
/// store does not hold have no box, even if the host still renders them.
fn node_box<L: Layout>(layout: &L, nodes: &NodeStore, key: &str, viewport: &Viewport) -> Option<Rect> {
    if !nodes.contains(key) {
        return None;
    }
    let client = layout.client_rect(key, viewport)?;
    Some(bounding_box_relative_to(&client, &layout.workspace_rect(), viewport))
}

fn render_needed(changed: bool) -> Vec<Event> {
    if changed { vec![Event::RenderNeeded] } else { Vec::new() }
}

pub struct Workspace<L: Layout> {
    layout: L,
    config: WorkspaceConfig,
    nodes: NodeStore,
    gestures: Gestures,
    selection: SelectionManager,
    edges: EdgeManager,
    anchors: AssociationAnchors,
    group: GroupSelection,
    drag: DragAndDrop,
    sizing: WorkspaceSizing,
    labels: DebugLabels,
    debug: bool,
    pending: PendingNotifications,
    external: Box<dyn ExternalDrop>,
}

impl<L: Layout> Workspace<L> {
    #[must_use]
    pub fn new(layout: L) -> Self {
        Self::with_config(layout, WorkspaceConfig::default())
    }

    #[must_use]
    pub fn with_config(layout: L, config: WorkspaceConfig) -> Self {
        Self {
            layout,
            config,
            nodes: NodeStore::new(),
            gestures: Gestures::new(config.scroll_edge, config.scroll_step),
            selection: SelectionManager::new(),
            edges: EdgeManager::new(config.anchor_padding),
            anchors: AssociationAnchors::new(),
            group: GroupSelection::new(),
            drag: DragAndDrop::new(),
            sizing: WorkspaceSizing {
                width: config.width,
                height: config.height,
                auto_resize: config.auto_resize,
                margin: config.resize_margin,
            },
            labels: DebugLabels::new(),
            debug: config.debug,
            pending: PendingNotifications::default(),
            external: Box::new(NoExternalDrop),
        }
    }

    /// Install the hook for drops that did not start in this workspace.
    #[must_use]
    pub fn with_external_drop(mut self, hook: impl ExternalDrop + 'static) -> Self {
        self.external = Box::new(hook);
        self
    }

    // --- Public element surface ---

    #[must_use]
    pub fn scroll_left(&self) -> f64 {
        self.gestures.viewport().scroll_left
    }

    #[must_use]
    pub fn scroll_top(&self) -> f64 {
        self.gestures.viewport().scroll_top
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.gestures.viewport().scale
    }

    #[must_use]
    pub fn zoom(&self) -> i32 {
        self.gestures.viewport().zoom
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.sizing.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.sizing.height
    }

    #[must_use]
    pub fn auto_resize(&self) -> bool {
        self.sizing.auto_resize
    }

    #[must_use]
    pub fn debug(&self) -> bool {
        self.debug
    }

    // --- Queries ---

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.gestures.viewport()
    }

    #[must_use]
    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Mutable access for hosts that apply `moved` notifications themselves.
    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    #[must_use]
    pub fn nodes(&self) -> &NodeStore {
        &self.nodes
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    #[must_use]
    pub fn edges(&self) -> &EdgeManager {
        &self.edges
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.anchors.is_drawing()
    }

    #[must_use]
    pub fn preview(&self) -> Option<PreviewLine> {
        self.anchors.preview()
    }

    /// The rubber band in workspace space, while one is active.
    #[must_use]
    pub fn selection_rect(&self) -> Option<Rect> {
        self.group.rect()
    }

    /// Workspace-space box of a node as currently rendered.
    #[must_use]
    pub fn bounding_box(&self, key: &str) -> Option<Rect> {
        node_box(&self.layout, &self.nodes, key, &self.gestures.viewport())
    }

    /// Convert a client-space point to workspace space.
    #[must_use]
    pub fn to_workspace_point(&self, client: Point) -> Point {
        to_workspace_point(client, &self.layout.workspace_rect(), &self.gestures.viewport())
    }

    /// Edges in paint order.
    #[must_use]
    pub fn render(&self) -> Vec<EdgeRender> {
        self.edges.render()
    }

    /// The overlay SVG: edges, preview line, and rubber band.
    #[must_use]
    pub fn render_svg(&self) -> String {
        routing::render_svg(&self.edges.render(), self.anchors.preview(), self.group.rect())
    }

    /// Position labels for every laid-out node. Empty unless debug is on.
    pub fn debug_labels(&mut self) -> Vec<DebugLabel> {
        if !self.debug {
            return Vec::new();
        }
        let viewport = self.gestures.viewport();
        let workspace = self.layout.workspace_rect();
        let layout = &self.layout;
        let boxes: Vec<(&str, Rect)> = self
            .nodes
            .iter()
            .filter_map(|n| Some((n.key(), layout.client_rect(n.key(), &viewport)?)))
            .collect();
        self.labels.labels(boxes, &workspace, &viewport)
    }

    // --- Host structure ---

    /// Bring the node registry in line with the host's element list.
    pub fn reconcile(&mut self, elements: &[ElementDescriptor]) -> Vec<Event> {
        let report = self.nodes.reconcile(elements);
        if report.is_empty() {
            return Vec::new();
        }
        tracing::debug!(
            attached = report.attached.len(),
            detached = report.detached.len(),
            changed = report.changed.len(),
            "nodes reconciled"
        );
        let rebound = self.drag.bind(&self.nodes);
        if !rebound.bound.is_empty() || !rebound.unbound.is_empty() {
            tracing::debug!(bound = rebound.bound.len(), unbound = rebound.unbound.len(), "drag listeners rebound");
        }
        for key in &report.detached {
            self.labels.forget(key);
        }
        let edges = &self.edges;
        let dropped = self.selection.retain_attached(&self.nodes, &|k: &str| edges.contains(k));
        if !dropped.is_empty() {
            tracing::debug!(count = dropped.len(), "detached nodes dropped from selection");
        }
        self.edges.sync_selection(&self.selection);

        for key in report.attached.iter().chain(&report.detached).chain(&report.changed) {
            self.recompute(key);
        }
        let mut events = self.fit_content();
        events.push(Event::RenderNeeded);
        events
    }

    /// A node's rendered geometry changed: recompute its connectors.
    pub fn geometry_changed(&mut self, key: &str) -> Vec<Event> {
        let routed = self.recompute(key);
        tracing::trace!(key = %key, routed, "geometry changed");
        let mut events = vec![Event::GeometryChange { key: key.to_string() }];
        events.extend(self.fit_content());
        events.push(Event::RenderNeeded);
        events
    }

    /// Register or update an edge. Geometry follows the next geometry change.
    pub fn upsert_edge(&mut self, descriptor: EdgeDescriptor) -> Vec<Event> {
        self.edges.upsert(descriptor);
        self.edges.sync_selection(&self.selection);
        Vec::new()
    }

    pub fn remove_edge(&mut self, id: &str) -> Vec<Event> {
        if self.edges.remove(id).is_none() {
            return Vec::new();
        }
        self.selection.set_unselected(id);
        if self.selection.hovered() == Some(id) {
            self.selection.set_hovered(None);
        }
        self.edges.sync_selection(&self.selection);
        vec![Event::RenderNeeded]
    }

    /// Recompute every edge from live geometry.
    pub fn recompute_all(&mut self) -> Vec<Event> {
        let viewport = self.gestures.viewport();
        let (layout, nodes) = (&self.layout, &self.nodes);
        let routed = self.edges.recompute_all(&|k: &str| node_box(layout, nodes, k, &viewport));
        tracing::debug!(routed, "all edges recomputed");
        vec![Event::RenderNeeded]
    }

    fn recompute(&mut self, key: &str) -> usize {
        let viewport = self.gestures.viewport();
        let (layout, nodes) = (&self.layout, &self.nodes);
        self.edges.recompute_for_node(key, &|k: &str| node_box(layout, nodes, k, &viewport))
    }

    fn content_bounds(&self) -> Option<Rect> {
        let viewport = self.gestures.viewport();
        self.nodes
            .iter()
            .filter_map(|n| node_box(&self.layout, &self.nodes, n.key(), &viewport))
            .filter(|r| !r.is_empty())
            .reduce(|a, b| a.union(&b))
    }

    fn fit_content(&mut self) -> Vec<Event> {
        if !self.sizing.auto_resize {
            return Vec::new();
        }
        let content = self.content_bounds();
        if self.sizing.fit(content) {
            vec![Event::Resize { width: self.sizing.width, height: self.sizing.height }]
        } else {
            Vec::new()
        }
    }

    // --- Pointer ---

    pub fn on_pointer_down(&mut self, client: Point, button: Button, modifiers: Modifiers, target: &Target) -> Vec<Event> {
        if button != Button::Primary {
            return Vec::new();
        }
        // A press while drawing means the release never arrived.
        let aborted = self.abort_draw();
        if aborted {
            tracing::debug!("unreleased association draw abandoned");
        }
        let band_ended = self.group.end();
        let mut events = self.press(client, modifiers, target);
        if (aborted || band_ended) && events.is_empty() {
            events.push(Event::RenderNeeded);
        }
        events
    }

    fn press(&mut self, client: Point, modifiers: Modifiers, target: &Target) -> Vec<Event> {
        match target {
            Target::Slot { key, slot } if self.accepts_slots(key) => {
                let source = self.slot_endpoint(key, slot, client);
                self.anchors.begin_create(source);
                vec![Event::RenderNeeded]
            }
            Target::Slot { key, .. } | Target::Node { key } => self.click_node(key, modifiers),
            Target::EdgeHandle { edge_id, tip } => {
                let Some((fixed, grabbed)) = self.edges.tips(edge_id, *tip) else {
                    tracing::trace!(edge = %edge_id, "handle on unrouted edge ignored");
                    return Vec::new();
                };
                let Some(source_key) = self.edges.get(edge_id).map(|e| e.descriptor.source.clone()) else {
                    return Vec::new();
                };
                self.edges.set_hidden(edge_id, true);
                self.anchors.begin_update(edge_id.clone(), *tip, source_key, fixed, grabbed);
                vec![Event::RenderNeeded]
            }
            Target::Canvas => {
                let cleared = !self.selection.deselect_all().is_empty();
                if cleared {
                    self.edges.sync_selection(&self.selection);
                }
                let at = self.to_workspace_point(client);
                self.group.begin(at);
                vec![Event::RenderNeeded]
            }
            Target::Outside => Vec::new(),
        }
    }

    pub fn on_pointer_move(&mut self, client: Point, target: &Target) -> Vec<Event> {
        if self.anchors.is_drawing() {
            let at = self.to_workspace_point(client);
            return render_needed(self.anchors.drag(at));
        }
        if self.group.is_selecting() {
            let workspace = self.layout.workspace_rect();
            if self.gestures.scroll_if_needed(client, &workspace) {
                self.pending.mark_scroll();
            }
            let at = self.to_workspace_point(client);
            let Some(band) = self.group.update(at) else {
                return Vec::new();
            };
            let candidates = self.selectable_boxes();
            let diff = GroupSelection::select_intersecting(&band, &candidates, &mut self.selection);
            if !diff.is_empty() {
                tracing::trace!(selected = diff.selected.len(), unselected = diff.unselected.len(), "band selection");
                self.edges.sync_selection(&self.selection);
            }
            return vec![Event::RenderNeeded];
        }
        let hovered = if let Target::EdgeHandle { edge_id, .. } = target {
            Some(edge_id.as_str()).filter(|id| self.edges.contains(id))
        } else {
            target.node_key().filter(|key| self.nodes.contains(key))
        };
        if self.selection.set_hovered(hovered) {
            self.edges.sync_selection(&self.selection);
            return vec![Event::RenderNeeded];
        }
        Vec::new()
    }

    pub fn on_pointer_up(&mut self, client: Point, target: &Target) -> Vec<Event> {
        if self.anchors.is_drawing() {
            let endpoint = match target {
                Target::Slot { key, slot } if self.accepts_slots(key) => Some(self.slot_endpoint(key, slot, client)),
                _ => None,
            };
            let updating = self.anchors.updating().map(str::to_string);
            let outcome = self.anchors.finish(endpoint);
            if let Some(id) = updating {
                self.edges.set_hidden(&id, false);
            }
            let mut events = Vec::new();
            if let DrawOutcome::Dispatched(event) = outcome {
                events.push(event);
            }
            events.push(Event::RenderNeeded);
            return events;
        }
        if self.group.end() {
            return vec![Event::RenderNeeded];
        }
        Vec::new()
    }

    /// Cancel any association draw and un-hide the edge it was re-routing.
    fn abort_draw(&mut self) -> bool {
        match self.anchors.cancel() {
            DrawOutcome::Cancelled { association_id } => {
                if let Some(id) = association_id {
                    self.edges.set_hidden(&id, false);
                }
                true
            }
            DrawOutcome::Idle | DrawOutcome::Dispatched(_) => false,
        }
    }

    fn click_node(&mut self, key: &str, modifiers: Modifiers) -> Vec<Event> {
        if !SelectionManager::is_selectable(&self.nodes, key) {
            return Vec::new();
        }
        let changed = if modifiers.shift {
            if self.selection.is_selected(key) {
                self.selection.set_unselected(key)
            } else {
                self.selection.set_selected(key)
            }
        } else if self.selection.is_selected(key) {
            false
        } else {
            self.selection.select_only(key)
        };
        if changed {
            self.edges.sync_selection(&self.selection);
        }
        render_needed(changed)
    }

    fn accepts_slots(&self, key: &str) -> bool {
        self.nodes.get(key).is_some_and(|n| n.attributes.association_slots)
    }

    /// Anchor point of a named slot: the middle of the matching side plus the
    /// slot's pixel nudges. Unknown slot names anchor at the node center.
    fn slot_endpoint(&self, key: &str, slot: &str, client: Point) -> SlotEndpoint {
        let point = match self.bounding_box(key) {
            Some(rect) => {
                let c = rect.center();
                let base = match Side::parse(slot) {
                    Some(Side::North) => Point::new(c.x, rect.top()),
                    Some(Side::South) => Point::new(c.x, rect.bottom()),
                    Some(Side::East) => Point::new(rect.right(), c.y),
                    Some(Side::West) => Point::new(rect.left(), c.y),
                    None => c,
                };
                let (dx, dy) = self
                    .nodes
                    .get(key)
                    .and_then(|n| n.slot(slot))
                    .map_or((0.0, 0.0), |s| (s.horizontal_offset, s.vertical_offset));
                Point::new(base.x + dx, base.y + dy)
            }
            None => self.to_workspace_point(client),
        };
        SlotEndpoint { id: key.to_string(), point, slot: slot.to_string() }
    }

    fn selectable_boxes(&self) -> Vec<(NodeKey, Rect)> {
        let viewport = self.gestures.viewport();
        SelectionManager::selectable(&self.nodes)
            .into_iter()
            .filter_map(|key| {
                let rect = node_box(&self.layout, &self.nodes, &key, &viewport)?;
                Some((key, rect))
            })
            .collect()
    }

    // --- Keyboard ---

    /// Escape cancels association drawing and rubber-band selection.
    pub fn on_key_down(&mut self, key: &Key, _modifiers: Modifiers) -> Vec<Event> {
        if !key.is_escape() {
            return Vec::new();
        }
        let mut changed = self.abort_draw();
        changed |= self.group.end();
        if self.drag.is_dragging() {
            self.drag.cancel();
        }
        render_needed(changed)
    }

    // --- Viewport ---

    fn viewport_changed(&mut self, change: ViewportChange) -> Vec<Event> {
        if change.scrolled {
            self.pending.mark_scroll();
        }
        if change.zoomed {
            self.pending.mark_zoom();
        }
        render_needed(change.any())
    }

    pub fn on_wheel(&mut self, delta: WheelDelta, modifiers: Modifiers) -> Vec<Event> {
        let change = self.gestures.on_wheel(delta, modifiers);
        self.viewport_changed(change)
    }

    pub fn on_touch_start(&mut self, touches: &[TouchPoint]) -> Vec<Event> {
        self.gestures.on_touch_start(touches);
        Vec::new()
    }

    pub fn on_touch_move(&mut self, touches: &[TouchPoint]) -> Vec<Event> {
        let change = self.gestures.on_touch_move(touches);
        self.viewport_changed(change)
    }

    pub fn on_touch_end(&mut self, remaining: &[TouchPoint]) -> Vec<Event> {
        self.gestures.on_touch_end(remaining);
        Vec::new()
    }

    pub fn on_click(&mut self, detail: u32) -> Vec<Event> {
        let change = self.gestures.on_click(detail);
        self.viewport_changed(change)
    }

    pub fn set_zoom(&mut self, zoom: i32) -> Vec<Event> {
        let zoomed = self.gestures.set_zoom(zoom);
        self.viewport_changed(ViewportChange { scrolled: false, zoomed })
    }

    pub fn set_scale(&mut self, scale: f64) -> Vec<Event> {
        let zoomed = self.gestures.set_scale(scale);
        self.viewport_changed(ViewportChange { scrolled: false, zoomed })
    }

    pub fn set_scroll(&mut self, left: f64, top: f64) -> Vec<Event> {
        let scrolled = self.gestures.set_scroll(left, top);
        self.viewport_changed(ViewportChange { scrolled, zoomed: false })
    }

    /// Emit the `scroll`/`zoomchange` notifications accumulated since the last flush.
    pub fn flush_notifications(&mut self) -> Vec<Event> {
        self.pending.flush(&self.gestures.viewport())
    }

    // --- Sizing / debug ---

    pub fn set_size(&mut self, width: f64, height: f64) -> Vec<Event> {
        if self.sizing.set_size(width, height) {
            vec![Event::Resize { width, height }]
        } else {
            Vec::new()
        }
    }

    pub fn set_auto_resize(&mut self, enabled: bool) -> Vec<Event> {
        self.sizing.auto_resize = enabled;
        self.fit_content()
    }

    pub fn set_debug(&mut self, enabled: bool) -> Vec<Event> {
        let changed = self.debug != enabled;
        self.debug = enabled;
        if !enabled {
            self.labels.clear();
        }
        render_needed(changed)
    }

    // --- Drag and drop ---

    /// `dragstart` on a node. Returns the payload to put on the data transfer.
    ///
    /// A node that is not yet selected becomes the only selection, so the
    /// drop always moves at least the dragged node.
    pub fn drag_start(&mut self, key: &str, client: Point) -> Option<DragPayload> {
        let at = self.to_workspace_point(client);
        let payload = self.drag.drag_start(key, at)?;
        if !self.selection.is_selected(key) && self.selection.select_only(key) {
            self.edges.sync_selection(&self.selection);
        }
        Some(payload)
    }

    /// `dragenter`/`dragover`: auto-scroll near the edges.
    pub fn drag_over(&mut self, client: Point) -> Vec<Event> {
        let workspace = self.layout.workspace_rect();
        let scrolled = self.gestures.scroll_if_needed(client, &workspace);
        self.viewport_changed(ViewportChange { scrolled, zoomed: false })
    }

    pub fn drop(&mut self, payload: &DragPayload, client: Point) -> Vec<Event> {
        let at = self.to_workspace_point(client);
        match self.drag.drop(payload, at) {
            DropOutcome::Internal { dx, dy } => {
                let viewport = self.gestures.viewport();
                let moved: Vec<Event> = self
                    .selection
                    .selected()
                    .iter()
                    .filter(|key| self.nodes.get(key).is_some_and(|n| n.attributes.draggable))
                    .filter_map(|key| {
                        let rect = node_box(&self.layout, &self.nodes, key, &viewport)?;
                        Some(Event::NodeMoved { key: key.clone(), x: rect.x + dx, y: rect.y + dy })
                    })
                    .collect();
                tracing::debug!(count = moved.len(), dx, dy, "internal drop");
                moved
            }
            DropOutcome::External => self.external.on_external_drop(payload, at),
            DropOutcome::Ignored => Vec::new(),
        }
    }

    // --- Selection API ---

    /// Select a node or edge. Nodes must be selectable; edges must be registered.
    pub fn select(&mut self, key: &str) -> Vec<Event> {
        let eligible = SelectionManager::is_selectable(&self.nodes, key) || self.edges.contains(key);
        if !eligible || !self.selection.set_selected(key) {
            return Vec::new();
        }
        self.edges.sync_selection(&self.selection);
        vec![Event::RenderNeeded]
    }

    pub fn deselect(&mut self, key: &str) -> Vec<Event> {
        if !self.selection.set_unselected(key) {
            return Vec::new();
        }
        self.edges.sync_selection(&self.selection);
        vec![Event::RenderNeeded]
    }

    pub fn deselect_all(&mut self) -> Vec<Event> {
        if self.selection.deselect_all().is_empty() {
            return Vec::new();
        }
        self.edges.sync_selection(&self.selection);
        vec![Event::RenderNeeded]
    }

    pub fn hover(&mut self, key: Option<&str>) -> Vec<Event> {
        if !self.selection.set_hovered(key) {
            return Vec::new();
        }
        self.edges.sync_selection(&self.selection);
        vec![Event::RenderNeeded]
    }

    // --- Alignment ---

    /// Align the selected alignable nodes. Emits one `moved` per repositioned node.
    pub fn align(&mut self, op: Alignment) -> Vec<Event> {
        let viewport = self.gestures.viewport();
        let items: Vec<(NodeKey, Rect)> = self
            .selection
            .selected()
            .iter()
            .filter(|key| self.nodes.get(key).is_some_and(|n| n.attributes.alignable))
            .filter_map(|key| {
                let rect = node_box(&self.layout, &self.nodes, key, &viewport)?;
                (!rect.is_empty()).then(|| (key.clone(), rect))
            })
            .collect();
        let placements = alignment::align(op, &items);
        tracing::debug!(?op, items = items.len(), moved = placements.len(), "alignment");
        placements.into_iter().map(|p| Event::NodeMoved { key: p.key, x: p.x, y: p.y }).collect()
    }

    // --- Reset ---

    /// Drop edge geometry, selection, in-flight gestures, and the viewport.
    pub fn reset(&mut self) -> Vec<Event> {
        tracing::debug!("workspace reset");
        self.edges.clear();
        self.selection.deselect_all();
        self.selection.set_hovered(None);
        self.abort_draw();
        self.group.end();
        self.drag.cancel();
        self.labels.clear();
        self.edges.sync_selection(&self.selection);
        let change = self.gestures.reset();
        if change.scrolled {
            self.pending.mark_scroll();
        }
        if change.zoomed {
            self.pending.mark_zoom();
        }
        vec![Event::RenderNeeded]
    }

    // --- Input stream ---

    /// Route one host input to its handler.
    pub fn dispatch(&mut self, input: Input) -> Vec<Event> {
        match input {
            Input::Reconcile { elements } => self.reconcile(&elements),
            Input::GeometryChange { key } => self.geometry_changed(&key),
            Input::UpsertEdge { edge } => self.upsert_edge(edge),
            Input::RemoveEdge { id } => self.remove_edge(&id),
            Input::PointerDown { x, y, button, modifiers, target } => {
                self.on_pointer_down(Point::new(x, y), button, modifiers, &target)
            }
            Input::PointerMove { x, y, target } => self.on_pointer_move(Point::new(x, y), &target),
            Input::PointerUp { x, y, target } => self.on_pointer_up(Point::new(x, y), &target),
            Input::Wheel { dx, dy, modifiers } => self.on_wheel(WheelDelta { dx, dy }, modifiers),
            Input::TouchStart { touches } => self.on_touch_start(&touches),
            Input::TouchMove { touches } => self.on_touch_move(&touches),
            Input::TouchEnd { touches } => self.on_touch_end(&touches),
            Input::Click { detail } => self.on_click(detail),
            Input::KeyDown { key, modifiers } => self.on_key_down(&key, modifiers),
            Input::DragStart { key, x, y } => render_needed(self.drag_start(&key, Point::new(x, y)).is_some()),
            Input::DragEnter { x, y } | Input::DragOver { x, y } => self.drag_over(Point::new(x, y)),
            Input::Drop { x, y, payload } => self.drop(&payload, Point::new(x, y)),
            Input::Select { key } => self.select(&key),
            Input::Deselect { key } => self.deselect(&key),
            Input::DeselectAll => self.deselect_all(),
            Input::Hover { key } => self.hover(key.as_deref()),
            Input::Align { op } => self.align(op),
            Input::SetZoom { zoom } => self.set_zoom(zoom),
            Input::SetScale { scale } => self.set_scale(scale),
            Input::SetScroll { left, top } => self.set_scroll(left, top),
            Input::SetSize { width, height } => self.set_size(width, height),
            Input::SetAutoResize { enabled } => self.set_auto_resize(enabled),
            Input::SetDebug { enabled } => self.set_debug(enabled),
            Input::Reset => self.reset(),
            Input::Flush => self.flush_notifications(),
        }
    }
}
