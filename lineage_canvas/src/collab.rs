// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host collaborators injected into [`TreeCanvas`](crate::TreeCanvas).
//!
//! The canvas never talks to a windowing system directly. Pointer capture
//! and container measurement are supplied through these traits so the
//! engine can be driven headlessly in tests.

use kurbo::Size;

/// Routes pointer events to the canvas for the duration of a drag.
pub trait PointerCapture {
    /// Called when a drag starts.
    fn set_capture(&mut self, pointer_id: u32);
    /// Called when a drag ends.
    fn release_capture(&mut self, pointer_id: u32);
}

/// No capture; suitable when the host already delivers every move event.
impl PointerCapture for () {
    fn set_capture(&mut self, _pointer_id: u32) {}
    fn release_capture(&mut self, _pointer_id: u32) {}
}

/// Reports the measured container size.
///
/// Hosts typically back this with a resize observer and forward its
/// callbacks through [`TreeCanvas::poll_size`](crate::TreeCanvas::poll_size).
pub trait SizeObserver {
    /// Latest measured size, or `None` if nothing has been measured yet.
    fn observed_size(&self) -> Option<Size>;
}

impl SizeObserver for Size {
    fn observed_size(&self) -> Option<Size> {
        Some(*self)
    }
}

impl SizeObserver for Option<Size> {
    fn observed_size(&self) -> Option<Size> {
        *self
    }
}
