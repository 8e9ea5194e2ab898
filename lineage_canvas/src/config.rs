// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lineage_layout::{ConnectorStyle, LayoutParams};
use lineage_view::{FitParams, ViewConstraints};

/// What a wheel event without Ctrl/Meta does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WheelPolicy {
    /// Leave plain wheel events to the host (for example, page scrolling).
    #[default]
    Ignore,
    /// Pan the view by the wheel delta.
    Pan,
}

/// What happens to the view when a node becomes selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Only record the selection; renderers use it for emphasis.
    #[default]
    EmphasizeOnly,
    /// Also center the selected node at the current scale.
    Recenter,
}

/// Tuning for a [`TreeCanvas`](crate::TreeCanvas).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasConfig {
    /// Layout margins, orientation and ordering.
    pub layout: LayoutParams,
    /// Zoom limits and padding.
    pub constraints: ViewConstraints,
    /// Auto-fit tuning.
    pub fit: FitParams,
    /// Connector canvas size and emphasis.
    pub connectors: ConnectorStyle,
    /// Scale change per Ctrl/Meta wheel notch.
    pub zoom_step: f64,
    /// Plain wheel behavior.
    pub wheel: WheelPolicy,
    /// Selection behavior.
    pub selection: SelectionPolicy,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            layout: LayoutParams::default(),
            constraints: ViewConstraints::default(),
            fit: FitParams::default(),
            connectors: ConnectorStyle::default(),
            zoom_step: 0.08,
            wheel: WheelPolicy::default(),
            selection: SelectionPolicy::default(),
        }
    }
}

impl CanvasConfig {
    /// Sets the layout parameters.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutParams) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the viewport constraints.
    #[must_use]
    pub fn with_constraints(mut self, constraints: ViewConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Sets the plain-wheel policy.
    #[must_use]
    pub fn with_wheel(mut self, wheel: WheelPolicy) -> Self {
        self.wheel = wheel;
        self
    }

    /// Sets the selection policy.
    #[must_use]
    pub fn with_selection(mut self, selection: SelectionPolicy) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the zoom step; non-positive or non-finite values fall back to the default.
    #[must_use]
    pub fn with_zoom_step(mut self, step: f64) -> Self {
        self.zoom_step = if step.is_finite() && step > 0.0 {
            step
        } else {
            Self::default().zoom_step
        };
        self
    }
}
