// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::fit::{self, FitParams};
use crate::viewport::{ViewConstraints, Viewport, has_area};

/// Constrained viewport over a percent-space layout.
///
/// `TreeViewport` owns the current [`Viewport`] together with everything
/// needed to keep it valid: the content bounds, the container size, the
/// constraint rules and the fit tuning. Every mutation is routed through
/// [`ViewConstraints::constrain`].
///
/// Mutations that need content bounds and a container with area return
/// `false` and leave the viewport untouched when either is missing.
#[derive(Clone, Debug)]
pub struct TreeViewport {
    viewport: Viewport,
    content_bounds: Option<Rect>,
    usable_extent: Size,
    container: Size,
    constraints: ViewConstraints,
    fit: FitParams,
}

impl Default for TreeViewport {
    fn default() -> Self {
        Self::new(ViewConstraints::default(), FitParams::default())
    }
}

impl TreeViewport {
    /// Creates a viewport with no content and a zero-sized container.
    #[must_use]
    pub fn new(constraints: ViewConstraints, fit: FitParams) -> Self {
        Self {
            viewport: Viewport::IDENTITY,
            content_bounds: None,
            usable_extent: Size::new(100.0, 100.0),
            container: Size::ZERO,
            constraints,
            fit,
        }
    }

    /// Current committed viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.viewport.scale
    }

    /// Current pan offset.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.viewport.pan
    }

    /// Content → container transform for the renderer.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.viewport.transform()
    }

    /// Constraint rules.
    #[must_use]
    pub fn constraints(&self) -> &ViewConstraints {
        &self.constraints
    }

    /// Replaces the constraint rules and re-clamps the current viewport.
    pub fn set_constraints(&mut self, constraints: ViewConstraints) {
        if self.constraints == constraints {
            return;
        }
        self.constraints = constraints;
        self.commit(self.viewport);
    }

    /// Fit tuning.
    #[must_use]
    pub fn fit_params(&self) -> &FitParams {
        &self.fit
    }

    /// Replaces the fit tuning. Takes effect on the next fit.
    pub fn set_fit_params(&mut self, fit: FitParams) {
        self.fit = fit;
    }

    /// Container size in pixels.
    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// Sets the container size.
    ///
    /// Returns `true` if the size changed. The viewport is re-clamped when
    /// possible but not refitted; callers decide when to refit.
    pub fn set_container(&mut self, container: Size) -> bool {
        if self.container == container {
            return false;
        }
        self.container = container;
        self.commit(self.viewport);
        true
    }

    /// Percent-space content bounds, if any.
    #[must_use]
    pub fn content_bounds(&self) -> Option<Rect> {
        self.content_bounds
    }

    /// Sets the content bounds and the usable percent extent inside the
    /// layout margins, then re-clamps.
    pub fn set_content(&mut self, bounds: Option<Rect>, usable_extent: Size) {
        self.content_bounds = bounds;
        self.usable_extent = usable_extent;
        self.commit(self.viewport);
    }

    /// Returns `true` when both content bounds and a container with area
    /// are available.
    #[must_use]
    pub fn has_geometry(&self) -> bool {
        self.content_bounds.is_some() && has_area(self.container)
    }

    /// Resets to the identity viewport without clamping.
    pub fn reset(&mut self) {
        self.viewport = Viewport::IDENTITY;
    }

    /// Moves the pan offset to `pan`, clamped.
    ///
    /// Returns `true` if the committed viewport changed.
    pub fn pan_to(&mut self, pan: Vec2) -> bool {
        if !self.has_geometry() {
            return false;
        }
        let old = self.viewport;
        self.commit(Viewport::new(pan, old.scale));
        self.viewport != old
    }

    /// Pans by a delta in container pixels, clamped.
    ///
    /// Returns `true` if the committed viewport changed.
    pub fn pan_by_view(&mut self, delta: Vec2) -> bool {
        self.pan_to(self.viewport.pan + delta)
    }

    /// Changes the scale to `scale` while keeping the content under
    /// `anchor_view` (container pixels) fixed, then clamps.
    ///
    /// The anchor stays exactly in place unless clamping moves the pan.
    /// Returns `true` if the committed viewport changed; a request that
    /// clamps to the current scale leaves the viewport untouched.
    pub fn zoom_about_view_point(&mut self, anchor_view: Point, scale: f64) -> bool {
        if !self.has_geometry() {
            return false;
        }
        let old = self.viewport;
        let scale = self.constraints.zoom_limits.clamp(scale);
        if scale == old.scale {
            return false;
        }
        let anchor_world = old.view_to_world_point(anchor_view);
        let pan = anchor_view.to_vec2() - anchor_world.to_vec2() * scale;
        self.commit(Viewport::new(pan, scale));
        self.viewport != old
    }

    /// Fits the whole content into the container.
    pub fn fit_content(&mut self) -> bool {
        match fit::fit_content(
            self.content_bounds,
            self.usable_extent,
            self.container,
            &self.constraints,
            &self.fit,
        ) {
            Some(viewport) => {
                self.viewport = viewport;
                true
            }
            None => false,
        }
    }

    /// Centers the percent-space point `target` in the container at the
    /// current scale.
    pub fn center_on(&mut self, target: Point) -> bool {
        match fit::center_on(
            self.viewport,
            target,
            self.content_bounds,
            self.container,
            &self.constraints,
        ) {
            Some(viewport) => {
                self.viewport = viewport;
                true
            }
            None => false,
        }
    }

    /// Percent-space rectangle currently visible through the container.
    ///
    /// Returns `None` when the container has no area.
    #[must_use]
    pub fn visible_percent_rect(&self) -> Option<Rect> {
        if !has_area(self.container) {
            return None;
        }
        let to_percent = |pt: Point| {
            let world = self.viewport.view_to_world_point(pt);
            Point::new(
                world.x * 100.0 / self.container.width,
                world.y * 100.0 / self.container.height,
            )
        };
        Some(Rect::from_points(
            to_percent(Point::ORIGIN),
            to_percent(Point::new(self.container.width, self.container.height)),
        ))
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TreeViewportDebugInfo {
        TreeViewportDebugInfo {
            viewport: self.viewport,
            content_bounds: self.content_bounds,
            container: self.container,
            visible_percent_rect: self.visible_percent_rect(),
            padding: self.constraints.padding(self.container),
            min_scale: self.constraints.zoom_limits.min(),
            max_scale: self.constraints.zoom_limits.max(),
        }
    }

    fn commit(&mut self, candidate: Viewport) {
        self.viewport = self
            .constraints
            .constrain(candidate, self.content_bounds, self.container);
    }
}

/// Debug snapshot of a [`TreeViewport`].
#[derive(Clone, Copy, Debug)]
pub struct TreeViewportDebugInfo {
    /// Committed viewport.
    pub viewport: Viewport,
    /// Percent-space content bounds.
    pub content_bounds: Option<Rect>,
    /// Container size in pixels.
    pub container: Size,
    /// Visible region in percent space.
    pub visible_percent_rect: Option<Rect>,
    /// Padding applied per axis.
    pub padding: Vec2,
    /// Minimum scale.
    pub min_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::TreeViewport;

    fn ready() -> TreeViewport {
        let mut vp = TreeViewport::default();
        vp.set_content(
            Some(Rect::new(30.0, 10.0, 70.0, 90.0)),
            Size::new(80.0, 80.0),
        );
        vp.set_container(Size::new(1000.0, 800.0));
        vp
    }

    #[test]
    fn mutations_need_geometry() {
        let mut vp = TreeViewport::default();
        assert!(!vp.has_geometry());
        assert!(!vp.pan_by_view(Vec2::new(10.0, 10.0)));
        assert!(!vp.zoom_about_view_point(Point::new(5.0, 5.0), 1.5));
        assert!(!vp.fit_content());
        assert!(!vp.center_on(Point::new(50.0, 50.0)));
        assert_eq!(vp.pan(), Vec2::ZERO);
        assert_eq!(vp.scale(), 1.0);
        assert!(vp.visible_percent_rect().is_none());
    }

    #[test]
    fn zoom_about_anchor_keeps_anchor_fixed() {
        let mut vp = ready();
        assert!(vp.fit_content());
        let anchor = Point::new(500.0, 400.0);
        let before = vp.viewport().view_to_world_point(anchor);
        assert!(vp.zoom_about_view_point(anchor, vp.scale() - 0.08));
        let after = vp.viewport().view_to_world_point(anchor);
        assert!((before.x - after.x).abs() < 1e-9);
        assert!((before.y - after.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_is_limited() {
        let mut vp = ready();
        vp.zoom_about_view_point(Point::new(0.0, 0.0), 40.0);
        assert_eq!(vp.scale(), 1.75);
        vp.zoom_about_view_point(Point::new(0.0, 0.0), 0.01);
        assert_eq!(vp.scale(), 0.75);
    }

    #[test]
    fn mutations_report_only_real_changes() {
        let mut vp = ready();
        assert!(vp.zoom_about_view_point(Point::new(300.0, 200.0), 40.0));
        let at_limit = vp.viewport();
        assert!(!vp.zoom_about_view_point(Point::new(300.0, 200.0), 40.0));
        assert!(!vp.zoom_about_view_point(Point::new(10.0, 700.0), 1.75));
        assert_eq!(vp.viewport(), at_limit);

        assert!(!vp.pan_to(vp.pan()));
        assert!(!vp.pan_by_view(Vec2::ZERO));
        assert_eq!(vp.viewport(), at_limit);
    }

    #[test]
    fn pan_is_kept_inside_padding() {
        let mut vp = ready();
        vp.fit_content();
        vp.pan_by_view(Vec2::new(10_000.0, 0.0));
        let info = vp.debug_info();
        // Right-most content (70% of 1000 px) must stay left of the right padding.
        let right_edge = vp
            .viewport()
            .world_to_view_point(Point::new(700.0, 0.0))
            .x;
        assert!(right_edge <= 1000.0 - info.padding.x + 1e-9);
    }

    #[test]
    fn resize_reclamps_but_does_not_refit() {
        let mut vp = ready();
        vp.fit_content();
        let scale = vp.scale();
        assert!(vp.set_container(Size::new(600.0, 500.0)));
        assert!(!vp.set_container(Size::new(600.0, 500.0)));
        assert_eq!(vp.scale(), scale);
    }

    #[test]
    fn identity_viewport_sees_whole_percent_space() {
        let vp = ready();
        let visible = vp.visible_percent_rect().unwrap();
        // Identity before clamping would show 0..100; clamping may shift it.
        assert!((visible.width() - 100.0).abs() < 1e-9);
        assert!((visible.height() - 100.0).abs() < 1e-9);
    }
}
