// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-fit and recentering.

use kurbo::{Point, Rect, Size, Vec2};

use crate::viewport::{ViewConstraints, Viewport, has_area, percent_to_pixels};

/// Tuning for [`fit_content`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitParams {
    /// Minimum content extent, as a fraction of the usable layout extent.
    ///
    /// Keeps a single member, or a single row, from being zoomed as if it
    /// were the whole picture.
    pub floor_ratio: f64,
    /// Absolute minimum content extent in percent units.
    pub min_extent_percent: f64,
    /// Multiplier applied to the fitted scale to leave room around the content.
    pub breathing_room: f64,
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            floor_ratio: 0.85,
            min_extent_percent: 36.0,
            breathing_room: 0.9,
        }
    }
}

/// Computes a viewport that frames `bounds` inside `container`.
///
/// `bounds` is the percent-space bounding box of the layout and
/// `usable_extent` the percent-space extent left inside the layout margins.
/// The content is centered and the result passed through
/// [`ViewConstraints::constrain`].
///
/// Returns `None` when there is no content or the container has no area.
#[must_use]
pub fn fit_content(
    bounds: Option<Rect>,
    usable_extent: Size,
    container: Size,
    constraints: &ViewConstraints,
    params: &FitParams,
) -> Option<Viewport> {
    let bounds = bounds?;
    if !has_area(container) {
        return None;
    }

    let floor = |usable: f64| params.min_extent_percent.max(usable * params.floor_ratio);
    let width_pct = bounds.width().max(floor(usable_extent.width));
    let height_pct = bounds.height().max(floor(usable_extent.height));

    let width_px = non_zero(width_pct * container.width / 100.0);
    let height_px = non_zero(height_pct * container.height / 100.0);

    let raw = (container.width / width_px).min(container.height / height_px);
    let scale = constraints.zoom_limits.clamp(raw * params.breathing_room);

    let center = percent_to_pixels(bounds.center(), container);
    let candidate = Viewport::new(centering_pan(center, container, scale), scale);
    Some(constraints.constrain(candidate, Some(bounds), container))
}

/// Pans `current` so the percent-space point `target` sits at the container
/// center, keeping the current scale.
///
/// Returns `None` when there is no content or the container has no area.
#[must_use]
pub fn center_on(
    current: Viewport,
    target: Point,
    bounds: Option<Rect>,
    container: Size,
    constraints: &ViewConstraints,
) -> Option<Viewport> {
    if bounds.is_none() || !has_area(container) {
        return None;
    }
    let target = percent_to_pixels(target, container);
    let candidate = Viewport::new(
        centering_pan(target, container, current.scale),
        current.scale,
    );
    Some(constraints.constrain(candidate, bounds, container))
}

fn centering_pan(content_pt: Point, container: Size, scale: f64) -> Vec2 {
    Vec2::new(
        container.width / 2.0 - content_pt.x * scale,
        container.height / 2.0 - content_pt.y * scale,
    )
}

fn non_zero(px: f64) -> f64 {
    if px > 0.0 { px } else { 1.0 }
}
