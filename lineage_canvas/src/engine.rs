// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Affine, Size};
use lineage_layout::{
    Connector, LayoutMetrics, Member, MemberId, PositionedMember, TreeLayout, connector_paths,
    layout,
};
use lineage_view::{TreeViewport, Viewport};

use crate::collab::{PointerCapture, SizeObserver};
use crate::config::{CanvasConfig, SelectionPolicy, WheelPolicy};
use crate::drag::DragState;
use crate::input::{ActivationKey, PointerButton, PointerEvent, PointerTarget, WheelEvent};

/// Pointer interaction state.
///
/// Zooming is applied immediately and never persists as a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Interaction {
    /// No gesture in progress.
    #[default]
    Idle,
    /// The background is being dragged to pan.
    Dragging,
}

type SelectCallback = Box<dyn FnMut(&MemberId)>;

/// Family-tree canvas engine.
///
/// Owns the member list, the cached layout and connectors, and the
/// constrained viewport. Hosts feed it members, container sizes, and input
/// events; renderers read [`nodes`](Self::nodes),
/// [`connectors`](Self::connectors) and [`transform`](Self::transform).
///
/// All entry points are fail-soft: input that cannot be applied (no members,
/// zero-sized container, wrong button) leaves the state untouched and
/// reports `false`.
pub struct TreeCanvas<P: PointerCapture = ()> {
    config: CanvasConfig,
    members: Vec<Member>,
    tree: TreeLayout,
    connectors: Vec<Connector>,
    view: TreeViewport,
    drag: DragState,
    needs_fit: bool,
    selected: Option<MemberId>,
    on_select: Option<SelectCallback>,
    capture: P,
    revision: u64,
}

impl<P: PointerCapture> fmt::Debug for TreeCanvas<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeCanvas")
            .field("config", &self.config)
            .field("members", &self.members.len())
            .field("connectors", &self.connectors.len())
            .field("view", &self.view)
            .field("drag", &self.drag)
            .field("needs_fit", &self.needs_fit)
            .field("selected", &self.selected)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl Default for TreeCanvas {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl TreeCanvas {
    /// Creates an empty canvas without pointer capture.
    #[must_use]
    pub fn new(config: CanvasConfig) -> Self {
        Self::with_pointer_capture(config, ())
    }
}

impl<P: PointerCapture> TreeCanvas<P> {
    /// Creates an empty canvas that captures the pointer through `capture`
    /// while dragging.
    pub fn with_pointer_capture(config: CanvasConfig, capture: P) -> Self {
        Self {
            config,
            members: Vec::new(),
            tree: layout(&[], &config.layout),
            connectors: Vec::new(),
            view: TreeViewport::new(config.constraints, config.fit),
            drag: DragState::default(),
            needs_fit: false,
            selected: None,
            on_select: None,
            capture,
            revision: 0,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Replaces the configuration, recomputing the layout and refitting.
    pub fn set_config(&mut self, config: CanvasConfig) {
        if self.config == config {
            return;
        }
        self.config = config;
        self.view.set_constraints(config.constraints);
        self.view.set_fit_params(config.fit);
        self.relayout();
    }

    /// Registers the callback invoked when a node is activated.
    pub fn set_on_select(&mut self, callback: impl FnMut(&MemberId) + 'static) {
        self.on_select = Some(Box::new(callback));
    }

    /// Replaces the member set.
    ///
    /// An equal member list is ignored, so re-sending unchanged data does not
    /// recompute geometry or refit. Otherwise the layout and connectors are
    /// rebuilt and a one-shot auto-fit is scheduled. Returns `true` when the
    /// layout was rebuilt.
    pub fn update(&mut self, members: Vec<Member>) -> bool {
        if self.members == members {
            return false;
        }
        #[cfg(feature = "tracing")]
        if let Err(err) = lineage_layout::validate_members(&members) {
            tracing::warn!(%err, "member set is inconsistent; laying out anyway");
        }
        self.members = members;
        self.relayout();
        true
    }

    /// Applies a new container size.
    ///
    /// A changed size schedules a one-shot auto-fit. A zero size is stored
    /// as-is and disables further viewport mutation until a usable size
    /// arrives. Returns `true` when the size changed.
    pub fn on_resize(&mut self, size: Size) -> bool {
        if !self.view.set_container(size) {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(width = size.width, height = size.height, "container resized");
        if !self.tree.is_empty() {
            self.needs_fit = true;
            self.try_fit();
        }
        true
    }

    /// Pulls the latest size from `observer` and applies it.
    pub fn poll_size(&mut self, observer: &impl SizeObserver) -> bool {
        observer
            .observed_size()
            .is_some_and(|size| self.on_resize(size))
    }

    /// Handles a pointer press. Starts a drag for primary presses on the
    /// background.
    pub fn on_pointer_down(&mut self, event: &PointerEvent) -> bool {
        if event.button != PointerButton::Primary || event.target != PointerTarget::Background {
            return false;
        }
        if let Some(previous) = self.drag.pointer_id {
            self.capture.release_capture(previous);
        }
        self.drag
            .start(event.position, self.view.pan(), event.pointer_id);
        self.capture.set_capture(event.pointer_id);
        true
    }

    /// Handles a pointer move. While dragging, pans so the grabbed content
    /// follows the pointer. Moves from pointers other than the one that
    /// started the drag are ignored. Returns `true` when the viewport
    /// changed.
    pub fn on_pointer_move(&mut self, event: &PointerEvent) -> bool {
        if !self.drag.is_owned_by(event.pointer_id) {
            return false;
        }
        let Some(target) = self.drag.target_pan(event.position) else {
            return false;
        };
        let changed = self.view.pan_to(target);
        #[cfg(feature = "tracing")]
        tracing::trace!(changed, x = self.view.pan().x, y = self.view.pan().y, "drag pan");
        changed
    }

    /// Handles a pointer release, ending the drag if `event` comes from the
    /// pointer that started it.
    pub fn on_pointer_up(&mut self, event: &PointerEvent) -> bool {
        self.end_drag(event.pointer_id)
    }

    /// Handles a pointer leaving the canvas, ending the drag if `event`
    /// comes from the pointer that started it.
    pub fn on_pointer_leave(&mut self, event: &PointerEvent) -> bool {
        self.end_drag(event.pointer_id)
    }

    /// Handles a click. A primary click on a node activates it.
    pub fn on_click(&mut self, event: &PointerEvent) -> bool {
        match &event.target {
            PointerTarget::Node(id) if event.button == PointerButton::Primary => {
                let id = id.clone();
                self.activate(&id)
            }
            _ => false,
        }
    }

    /// Handles a key press while the node `id` has focus.
    pub fn on_key(&mut self, id: &MemberId, key: ActivationKey) -> bool {
        key.activates() && self.activate(id)
    }

    /// Handles a wheel event.
    ///
    /// With Ctrl or Meta held, zooms by one step about the pointer: scrolling
    /// up zooms in, down zooms out, and a zero vertical delta does nothing.
    /// Without a modifier, behaves according to [`WheelPolicy`]. Returns
    /// `true` when the viewport changed; a zoom already at its limit
    /// reports `false`.
    pub fn on_wheel(&mut self, event: &WheelEvent) -> bool {
        if event.modifiers.is_zoom_gesture() {
            let direction = if event.delta.y < 0.0 {
                1.0
            } else if event.delta.y > 0.0 {
                -1.0
            } else {
                return false;
            };
            let target = self.view.scale() + direction * self.config.zoom_step;
            let changed = self.view.zoom_about_view_point(event.position, target);
            #[cfg(feature = "tracing")]
            tracing::trace!(changed, scale = self.view.scale(), "wheel zoom");
            return changed;
        }
        match self.config.wheel {
            WheelPolicy::Ignore => false,
            WheelPolicy::Pan => self.view.pan_by_view(-event.delta),
        }
    }

    /// Activates the node `id`: selects it and notifies the callback.
    ///
    /// Returns `false` if `id` is not part of the current layout.
    pub fn activate(&mut self, id: &MemberId) -> bool {
        if self.tree.get(id.as_str()).is_none() {
            return false;
        }
        self.set_selected(Some(id.clone()));
        if let Some(callback) = self.on_select.as_mut() {
            callback(id);
        }
        true
    }

    /// Sets the externally owned selection without invoking the callback.
    ///
    /// Under [`SelectionPolicy::Recenter`] the newly selected node is
    /// centered at the current scale.
    pub fn set_selected(&mut self, id: Option<MemberId>) {
        if self.selected == id {
            return;
        }
        self.selected = id;
        if self.config.selection == SelectionPolicy::Recenter {
            self.recenter_on_selection();
        }
    }

    /// Currently selected member, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&MemberId> {
        self.selected.as_ref()
    }

    /// Returns `true` if `id` is the selected member.
    #[must_use]
    pub fn is_selected(&self, id: &MemberId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Current member list.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Cached layout.
    #[must_use]
    pub fn layout(&self) -> &TreeLayout {
        &self.tree
    }

    /// Positioned members in input order.
    #[must_use]
    pub fn nodes(&self) -> &[PositionedMember] {
        self.tree.nodes()
    }

    /// Layout metrics.
    #[must_use]
    pub fn metrics(&self) -> LayoutMetrics {
        self.tree.metrics()
    }

    /// Cached connector curves.
    #[must_use]
    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// Committed viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.view.viewport()
    }

    /// Content → container transform for the renderer.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.view.transform()
    }

    /// The underlying constrained viewport.
    #[must_use]
    pub fn view(&self) -> &TreeViewport {
        &self.view
    }

    /// Current interaction state.
    #[must_use]
    pub fn interaction(&self) -> Interaction {
        if self.drag.is_dragging() {
            Interaction::Dragging
        } else {
            Interaction::Idle
        }
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns `true` while an auto-fit is pending on missing geometry.
    #[must_use]
    pub fn needs_fit(&self) -> bool {
        self.needs_fit
    }

    /// Counter bumped every time the layout is rebuilt.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The pointer capture collaborator.
    #[must_use]
    pub fn pointer_capture(&self) -> &P {
        &self.capture
    }

    fn relayout(&mut self) {
        self.tree = layout(&self.members, &self.config.layout);
        self.connectors = connector_paths(&self.tree, &self.config.connectors);
        self.revision += 1;
        self.view
            .set_content(self.tree.bounds(), self.tree.metrics().usable_extent());
        #[cfg(feature = "tracing")]
        tracing::debug!(
            members = self.tree.nodes().len(),
            generations = self.tree.metrics().generation_count,
            connectors = self.connectors.len(),
            revision = self.revision,
            "layout rebuilt"
        );
        if self.tree.is_empty() {
            self.view.reset();
            self.needs_fit = false;
            return;
        }
        self.needs_fit = true;
        self.try_fit();
    }

    fn try_fit(&mut self) {
        if !self.needs_fit {
            return;
        }
        if self.view.fit_content() {
            self.needs_fit = false;
            #[cfg(feature = "tracing")]
            tracing::debug!(
                scale = self.view.scale(),
                x = self.view.pan().x,
                y = self.view.pan().y,
                "auto-fit applied"
            );
        }
    }

    fn recenter_on_selection(&mut self) {
        let Some(id) = &self.selected else {
            return;
        };
        if let Some(node) = self.tree.get(id.as_str()) {
            self.view.center_on(node.position);
        }
    }

    fn end_drag(&mut self, pointer_id: u32) -> bool {
        if !self.drag.is_owned_by(pointer_id) {
            return false;
        }
        match self.drag.end() {
            Some(pointer_id) => {
                self.capture.release_capture(pointer_id);
                true
            }
            None => false,
        }
    }
}
