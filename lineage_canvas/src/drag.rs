// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-pan state: remembers where a drag began and where the view was.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragState::start`], passing the pointer position and
//!    the pan offset at that moment.
//! 2) On each move from the owning pointer (see [`DragState::is_owned_by`]),
//!    [`DragState::target_pan`] gives the pan that keeps the grabbed content
//!    under the pointer.
//! 3) End with [`DragState::end`], which hands back the pointer id so capture
//!    can be released.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use lineage_canvas::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0), Vec2::new(100.0, 0.0), 1);
//! assert!(drag.is_dragging());
//! assert!(!drag.is_owned_by(2));
//!
//! let target = drag.target_pan(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(target, Vec2::new(105.0, 5.0));
//! assert_eq!(drag.end(), Some(1));
//! ```

use kurbo::{Point, Vec2};

/// Tracks an in-progress pan drag.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Pointer position where the drag began.
    pub start_pos: Option<Point>,
    /// Pan offset when the drag began.
    pub start_pan: Vec2,
    /// Pointer that owns the drag.
    pub pointer_id: Option<u32>,
}

impl DragState {
    /// Begins a drag at `pos` with the view currently panned by `pan`.
    pub fn start(&mut self, pos: Point, pan: Vec2, pointer_id: u32) {
        self.start_pos = Some(pos);
        self.start_pan = pan;
        self.pointer_id = Some(pointer_id);
    }

    /// Returns `true` if a drag is active and `pointer_id` started it.
    #[must_use]
    pub fn is_owned_by(&self, pointer_id: u32) -> bool {
        self.is_dragging() && self.pointer_id == Some(pointer_id)
    }

    /// Offset from the drag start to `current_pos`.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Pan offset that follows the pointer from the drag start.
    #[must_use]
    pub fn target_pan(&self, current_pos: Point) -> Option<Vec2> {
        self.total_offset(current_pos)
            .map(|offset| self.start_pan + offset)
    }

    /// Ends the drag, returning the pointer that owned it.
    pub fn end(&mut self) -> Option<u32> {
        let pointer_id = self.pointer_id.take();
        self.start_pos = None;
        self.start_pan = Vec2::ZERO;
        pointer_id
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
