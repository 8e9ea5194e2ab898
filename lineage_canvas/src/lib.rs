// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lineage Canvas: an interactive, headless family-tree canvas.
//!
//! [`TreeCanvas`] ties the pieces together:
//! - it caches the `lineage_layout` layout and connector curves for the
//!   current member list, recomputing only when the list changes;
//! - it owns a `lineage_view` viewport and runs a one-shot auto-fit whenever
//!   the members or the container size change;
//! - it turns pointer, wheel and key events into drag-to-pan, anchored zoom,
//!   and node activation.
//!
//! Rendering is left to the host: read [`TreeCanvas::nodes`],
//! [`TreeCanvas::connectors`] and [`TreeCanvas::transform`] each frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use lineage_canvas::{CanvasConfig, Modifiers, PointerEvent, TreeCanvas, WheelEvent};
//! use lineage_layout::Member;
//!
//! let mut canvas = TreeCanvas::new(CanvasConfig::default());
//! canvas.update(vec![
//!     Member::new("p1", "Evelyn").with_children(["c1"]),
//!     Member::new("c1", "Jordan").with_generation(1).with_parents(["p1"]),
//! ]);
//!
//! // Nothing to fit against until the host reports a size.
//! assert!(canvas.needs_fit());
//! canvas.on_resize(Size::new(800.0, 600.0));
//! assert!(!canvas.needs_fit());
//!
//! // Ctrl + wheel up zooms in about the pointer.
//! let before = canvas.viewport().scale;
//! let wheel = WheelEvent::new((400.0, 300.0), (0.0, -1.0)).with_modifiers(Modifiers::CTRL);
//! canvas.on_wheel(&wheel);
//! assert!(canvas.viewport().scale >= before);
//!
//! // Dragging the background pans.
//! canvas.on_pointer_down(&PointerEvent::at((100.0, 100.0)));
//! canvas.on_pointer_move(&PointerEvent::at((120.0, 100.0)));
//! canvas.on_pointer_up(&PointerEvent::at((120.0, 100.0)));
//! assert!(!canvas.is_dragging());
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo and the sibling crates.
//! - `libm`: floating point support without `std`.
//! - `tracing`: emits `tracing` events for layout rebuilds, auto-fit, and
//!   gestures, and warns about inconsistent member sets.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod collab;
mod config;
pub mod drag;
mod engine;
pub mod input;

pub use collab::{PointerCapture, SizeObserver};
pub use config::{CanvasConfig, SelectionPolicy, WheelPolicy};
pub use engine::{Interaction, TreeCanvas};
pub use input::{
    ActivationKey, Modifiers, PointerButton, PointerEvent, PointerTarget, WheelEvent,
};
