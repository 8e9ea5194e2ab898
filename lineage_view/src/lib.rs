// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lineage View: pan/zoom viewport, padded clamping, and auto-fit.
//!
//! This crate provides a small, headless model of the camera over a family
//! tree layout. Layout positions live in a normalized percent space
//! (`0..=100` per axis); this crate maps them into container pixels and
//! keeps the resulting view usable:
//! - [`Viewport`] is the committed pan offset and uniform scale.
//! - [`ViewConstraints::constrain`] clamps a candidate viewport so the
//!   content stays inside the padded container.
//! - [`fit_content`] frames the whole layout, and [`center_on`] brings one
//!   point to the middle.
//! - [`TreeViewport`] bundles the above with the current content bounds and
//!   container size, routing every mutation through the constraint.
//!
//! It does **not** interpret input events; `lineage_canvas` turns pointer
//! and wheel gestures into calls on [`TreeViewport`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use lineage_view::TreeViewport;
//!
//! let mut view = TreeViewport::default();
//! view.set_content(Some(Rect::new(10.0, 10.0, 90.0, 90.0)), Size::new(80.0, 80.0));
//! view.set_container(Size::new(800.0, 600.0));
//! assert!(view.fit_content());
//!
//! // Dragging far away is clamped back.
//! let before = view.pan();
//! view.pan_by_view(Vec2::new(10_000.0, 0.0));
//! assert!(view.pan().x - before.x < 10_000.0);
//!
//! // Zooming keeps the content under the pointer in place.
//! let anchor = Point::new(400.0, 300.0);
//! view.zoom_about_view_point(anchor, view.scale() + 0.08);
//! assert!(view.scale() <= 1.75);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and bounded (`0.75..=1.75` by default, see [`ZoomLimits`]).
//! - A content point `c` is drawn at `pan + c * scale`; the renderer applies
//!   [`Viewport::transform`].
//! - Missing content or a zero-sized container turns every mutation into a
//!   no-op instead of an error.
//!
//! This crate is `no_std`.

#![no_std]

mod fit;
mod modes;
mod tree_viewport;
mod viewport;

pub use fit::{FitParams, center_on, fit_content};
pub use modes::ClampMode;
pub use tree_viewport::{TreeViewport, TreeViewportDebugInfo};
pub use viewport::{ViewConstraints, Viewport, ZoomLimits, percent_to_pixels};
