// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::modes::ClampMode;

/// Pan offset and uniform zoom applied to the laid out content.
///
/// Content coordinates are pixels obtained by scaling the layout's percent
/// space by the container size. A content point `c` appears on screen at
/// `pan + c * scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Translation in container pixels.
    pub pan: Vec2,
    /// Uniform zoom factor.
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Viewport {
    /// No pan, unit scale.
    pub const IDENTITY: Self = Self {
        pan: Vec2::ZERO,
        scale: 1.0,
    };

    /// Creates a viewport from a pan offset and scale.
    #[must_use]
    pub fn new(pan: impl Into<Vec2>, scale: f64) -> Self {
        Self {
            pan: pan.into(),
            scale,
        }
    }

    /// Content → container transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.scale)
    }

    /// Maps a content-space point into container pixels.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        (self.pan + pt.to_vec2() * self.scale).to_point()
    }

    /// Maps a container-space point back into content pixels.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        ((pt.to_vec2() - self.pan) / self.scale).to_point()
    }
}

/// Converts a percent-space point into content pixels for `container`.
#[must_use]
pub fn percent_to_pixels(pt: Point, container: Size) -> Point {
    Point::new(pt.x * container.width / 100.0, pt.y * container.height / 100.0)
}

/// Inclusive range of allowed zoom factors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    min: f64,
    max: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 0.75,
            max: 1.75,
        }
    }
}

impl ZoomLimits {
    /// Creates limits, swapping the ends if given in the wrong order.
    ///
    /// A non-finite end falls back to the default for that end.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let defaults = Self::default();
        let min = if min.is_finite() { min } else { defaults.min };
        let max = if max.is_finite() { max } else { defaults.max };
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self { min, max }
    }

    /// Smallest allowed scale.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest allowed scale.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `scale` into the limits. Non-finite input resolves to `min`.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        if scale.is_finite() {
            scale.clamp(self.min, self.max)
        } else {
            self.min
        }
    }
}

/// Rules that keep a candidate [`Viewport`] usable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConstraints {
    /// Allowed zoom range.
    pub zoom_limits: ZoomLimits,
    /// Upper bound on the padding kept between content and container edge.
    pub max_padding: f64,
    /// Padding as a fraction of the container extent, before capping.
    pub padding_fraction: f64,
    /// Whether pan is clamped at all.
    pub clamp_mode: ClampMode,
}

impl Default for ViewConstraints {
    fn default() -> Self {
        Self {
            zoom_limits: ZoomLimits::default(),
            max_padding: 64.0,
            padding_fraction: 0.08,
            clamp_mode: ClampMode::default(),
        }
    }
}

impl ViewConstraints {
    /// Padding kept on each side of each axis for `container`.
    #[must_use]
    pub fn padding(&self, container: Size) -> Vec2 {
        Vec2::new(
            self.max_padding.min(container.width * self.padding_fraction),
            self.max_padding.min(container.height * self.padding_fraction),
        )
    }

    /// Clamps `candidate` so the content described by `bounds` stays in view.
    ///
    /// `bounds` is in the layout's percent space. If there are no bounds or
    /// the container has no area, the candidate is returned unchanged.
    /// Otherwise the scale is clamped to the zoom limits and each pan axis is
    /// clamped into its padded interval (see [`ClampMode::ContainPadded`]).
    ///
    /// Applying this twice gives the same result as applying it once.
    #[must_use]
    pub fn constrain(&self, candidate: Viewport, bounds: Option<Rect>, container: Size) -> Viewport {
        let Some(bounds) = bounds else {
            return candidate;
        };
        if !has_area(container) {
            return candidate;
        }

        let scale = self.zoom_limits.clamp(candidate.scale);
        if self.clamp_mode == ClampMode::None {
            return Viewport::new(candidate.pan, scale);
        }

        let padding = self.padding(container);
        let min = percent_to_pixels(Point::new(bounds.x0, bounds.y0), container);
        let max = percent_to_pixels(Point::new(bounds.x1, bounds.y1), container);

        let x = clamp_axis(
            candidate.pan.x,
            padding.x - min.x * scale,
            container.width - padding.x - max.x * scale,
        );
        let y = clamp_axis(
            candidate.pan.y,
            padding.y - min.y * scale,
            container.height - padding.y - max.y * scale,
        );
        Viewport::new((x, y), scale)
    }
}

/// Returns `true` when `size` is finite and positive on both axes.
pub(crate) fn has_area(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

fn clamp_axis(value: f64, low: f64, high: f64) -> f64 {
    if low <= high {
        value.clamp(low, high)
    } else {
        (low + high) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Size = Size::new(1000.0, 800.0);

    #[test]
    fn transform_matches_point_mapping() {
        let vp = Viewport::new((30.0, -12.0), 1.5);
        let p = Point::new(40.0, 10.0);
        let a = vp.transform() * p;
        let b = vp.world_to_view_point(p);
        assert!((a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9);
        let back = vp.view_to_world_point(b);
        assert!((back.x - p.x).abs() < 1e-9 && (back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_limits_normalize_and_clamp() {
        let limits = ZoomLimits::new(2.0, 0.5);
        assert_eq!(limits.min(), 0.5);
        assert_eq!(limits.max(), 2.0);
        assert_eq!(limits.clamp(9.0), 2.0);
        assert_eq!(limits.clamp(f64::NAN), 0.5);
    }

    #[test]
    fn non_finite_zoom_limits_fall_back_to_defaults() {
        let limits = ZoomLimits::new(f64::NAN, 1.5);
        assert_eq!(limits.min(), 0.75);
        assert_eq!(limits.max(), 1.5);
        let limits = ZoomLimits::new(1.0, f64::INFINITY);
        assert_eq!(limits.max(), 1.75);
        assert_eq!(ZoomLimits::new(f64::NAN, f64::NAN), ZoomLimits::default());

        let c = ViewConstraints {
            zoom_limits: ZoomLimits::new(f64::NAN, 1.75),
            ..ViewConstraints::default()
        };
        let bounds = Some(Rect::new(40.0, 40.0, 60.0, 60.0));
        let out = c.constrain(Viewport::new((0.0, 0.0), 3.0), bounds, CONTAINER);
        assert_eq!(out.scale, 1.75);
    }

    #[test]
    fn padding_is_capped() {
        let c = ViewConstraints::default();
        assert_eq!(c.padding(CONTAINER), Vec2::new(64.0, 64.0));
        let small = c.padding(Size::new(500.0, 100.0));
        assert!((small.x - 40.0).abs() < 1e-9);
        assert!((small.y - 8.0).abs() < 1e-9);
    }

    #[test]
    fn missing_inputs_leave_candidate_untouched() {
        let c = ViewConstraints::default();
        let wild = Viewport::new((5000.0, -5000.0), 9.0);
        assert_eq!(c.constrain(wild, None, CONTAINER), wild);
        let bounds = Some(Rect::new(10.0, 10.0, 90.0, 90.0));
        assert_eq!(c.constrain(wild, bounds, Size::ZERO), wild);
        assert_eq!(c.constrain(wild, bounds, Size::new(0.0, 600.0)), wild);
    }

    #[test]
    fn pan_is_clamped_into_padded_interval() {
        let c = ViewConstraints::default();
        // Content spans 400..600 px horizontally, 320..480 px vertically.
        let bounds = Some(Rect::new(40.0, 40.0, 60.0, 60.0));
        let out = c.constrain(Viewport::new((5000.0, -5000.0), 1.0), bounds, CONTAINER);
        // x high = 1000 - 64 - 600; y low = 64 - 320.
        assert_eq!(out.pan, Vec2::new(336.0, -256.0));
        assert_eq!(out.scale, 1.0);
    }

    #[test]
    fn inverted_interval_resolves_to_midpoint() {
        let c = ViewConstraints::default();
        // Content spans the full container, which cannot fit inside the padding.
        let bounds = Some(Rect::new(0.0, 0.0, 100.0, 100.0));
        let out = c.constrain(Viewport::new((123.0, 456.0), 1.0), bounds, CONTAINER);
        // Interval [64, -64] on both axes → midpoint 0.
        assert_eq!(out.pan, Vec2::ZERO);
    }

    #[test]
    fn clamp_mode_none_only_limits_scale() {
        let c = ViewConstraints {
            clamp_mode: ClampMode::None,
            ..ViewConstraints::default()
        };
        let bounds = Some(Rect::new(40.0, 40.0, 60.0, 60.0));
        let out = c.constrain(Viewport::new((5000.0, 1.0), 0.1), bounds, CONTAINER);
        assert_eq!(out.pan, Vec2::new(5000.0, 1.0));
        assert_eq!(out.scale, 0.75);
    }
}
