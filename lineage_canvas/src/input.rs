// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input event types consumed by [`TreeCanvas`](crate::TreeCanvas).
//!
//! Positions are container-relative pixels. The host translates its native
//! events into these before forwarding them.

use kurbo::{Point, Vec2};
use lineage_layout::MemberId;

bitflags::bitflags! {
    /// Keyboard modifiers held during an event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Control key.
        const CTRL  = 0b0000_0010;
        /// Alt / Option key.
        const ALT   = 0b0000_0100;
        /// Meta / Command key.
        const META  = 0b0000_1000;
    }
}

impl Modifiers {
    /// Returns `true` when the wheel should zoom instead of pan.
    #[must_use]
    pub fn is_zoom_gesture(self) -> bool {
        self.intersects(Self::CTRL | Self::META)
    }
}

/// Pointer button that triggered a press or release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    /// Left mouse button, pen contact, or touch.
    #[default]
    Primary,
    /// Right mouse button.
    Secondary,
    /// Middle mouse button.
    Auxiliary,
}

/// What the pointer was over when the event fired.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum PointerTarget {
    /// Empty canvas.
    #[default]
    Background,
    /// An interactive member node.
    Node(MemberId),
}

/// A pointer press, move, release or leave.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Host-assigned pointer identifier, used for pointer capture.
    pub pointer_id: u32,
    /// Position in container pixels.
    pub position: Point,
    /// Button involved.
    pub button: PointerButton,
    /// Hit target under the pointer.
    pub target: PointerTarget,
}

impl PointerEvent {
    /// A primary-button event on the background at `position`.
    #[must_use]
    pub fn at(position: impl Into<Point>) -> Self {
        Self {
            pointer_id: 1,
            position: position.into(),
            button: PointerButton::Primary,
            target: PointerTarget::Background,
        }
    }

    /// Sets the button.
    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Sets the pointer identifier.
    #[must_use]
    pub fn with_pointer_id(mut self, pointer_id: u32) -> Self {
        self.pointer_id = pointer_id;
        self
    }

    /// Marks the event as landing on the node `id`.
    #[must_use]
    pub fn on_node(mut self, id: impl Into<MemberId>) -> Self {
        self.target = PointerTarget::Node(id.into());
        self
    }
}

/// A wheel or trackpad scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Position in container pixels.
    pub position: Point,
    /// Scroll delta; positive `y` scrolls down.
    pub delta: Vec2,
    /// Modifiers held.
    pub modifiers: Modifiers,
}

impl WheelEvent {
    /// A wheel event with no modifiers.
    #[must_use]
    pub fn new(position: impl Into<Point>, delta: impl Into<Vec2>) -> Self {
        Self {
            position: position.into(),
            delta: delta.into(),
            modifiers: Modifiers::empty(),
        }
    }

    /// Sets the modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Keys that may activate a focused node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActivationKey {
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Any other key; never activates.
    Other,
}

impl ActivationKey {
    /// Returns `true` for keys that activate a node.
    #[must_use]
    pub fn activates(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_or_meta_zooms() {
        assert!(Modifiers::CTRL.is_zoom_gesture());
        assert!(Modifiers::META.is_zoom_gesture());
        assert!((Modifiers::SHIFT | Modifiers::CTRL).is_zoom_gesture());
        assert!(!Modifiers::SHIFT.is_zoom_gesture());
        assert!(!Modifiers::empty().is_zoom_gesture());
    }

    #[test]
    fn pointer_event_builders() {
        let e = PointerEvent::at((3.0, 4.0))
            .with_button(PointerButton::Secondary)
            .with_pointer_id(7)
            .on_node("ada");
        assert_eq!(e.position, Point::new(3.0, 4.0));
        assert_eq!(e.button, PointerButton::Secondary);
        assert_eq!(e.pointer_id, 7);
        assert_eq!(e.target, PointerTarget::Node("ada".into()));
    }

    #[test]
    fn only_enter_and_space_activate() {
        assert!(ActivationKey::Enter.activates());
        assert!(ActivationKey::Space.activates());
        assert!(!ActivationKey::Other.activates());
    }
}
