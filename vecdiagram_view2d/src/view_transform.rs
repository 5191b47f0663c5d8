// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::modes::OriginClamp;

/// Smallest pinch scale factor accepted by [`ViewTransform::zoom_by`].
pub const MIN_ZOOM_FACTOR: f64 = 0.01;

/// Default lower scale bound.
pub const DEFAULT_MIN_SCALE: f64 = 0.3;

/// Default upper scale bound.
pub const DEFAULT_MAX_SCALE: f64 = 3.0;

/// Pan + uniform scale camera for a diagram surface.
///
/// The mapping is translate-then-scale:
///
/// ```text
/// screen = (logical + origin) * scale
/// ```
///
/// `origin` is the pan offset and `scale` is always kept inside
/// `[min_scale, max_scale]`.
#[derive(Clone, Debug)]
pub struct ViewTransform {
    viewport: Size,
    origin: Vec2,
    scale: f64,
    min_scale: f64,
    max_scale: f64,
    origin_clamp: OriginClamp,
    logical_to_screen: Affine,
    screen_to_logical: Affine,
}

impl ViewTransform {
    /// Creates a transform for a viewport of the given size.
    ///
    /// - Initial scale is `1.0`.
    /// - Initial origin is zero.
    /// - Scale is clamped to `[DEFAULT_MIN_SCALE, DEFAULT_MAX_SCALE]`.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        let mut vt = Self {
            viewport,
            origin: Vec2::ZERO,
            scale: 1.0,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            origin_clamp: OriginClamp::default(),
            logical_to_screen: Affine::IDENTITY,
            screen_to_logical: Affine::IDENTITY,
        };
        vt.rebuild_transforms();
        vt
    }

    /// Returns the viewport size in screen units.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Sets the viewport size, for example after a host layout pass.
    ///
    /// Scale and origin are kept; the origin is re-clamped if
    /// [`OriginClamp::Viewport`] is active.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.clamp_origin();
        self.rebuild_transforms();
    }

    /// Returns the current pan offset.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Replaces the pan offset, applying the origin clamp.
    pub fn set_origin(&mut self, origin: Vec2) {
        if !origin.is_finite() {
            return;
        }
        self.origin = origin;
        self.clamp_origin();
        self.rebuild_transforms();
    }

    /// Returns the current scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the scale factor, clamping it into the configured bounds.
    ///
    /// The origin is left untouched, so the diagram scales about the screen
    /// origin. Use [`ViewTransform::zoom_by`] to scale about a focal point.
    pub fn set_scale(&mut self, scale: f64) {
        if !scale.is_finite() {
            return;
        }
        self.scale = scale.clamp(self.min_scale, self.max_scale);
        self.rebuild_transforms();
    }

    /// Returns the lower scale bound.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Returns the upper scale bound.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Replaces both scale bounds.
    ///
    /// The pair is normalized so that `min <= max`, and the lower bound is
    /// kept strictly positive. The current scale is re-clamped right away.
    pub fn set_scale_bounds(&mut self, min: f64, max: f64) {
        if !min.is_finite() || !max.is_finite() {
            return;
        }
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min_scale = min.max(f64::MIN_POSITIVE);
        self.max_scale = max.max(self.min_scale);
        self.set_scale(self.scale);
    }

    /// Replaces only the lower scale bound.
    pub fn set_min_scale(&mut self, min: f64) {
        self.set_scale_bounds(min, self.max_scale.max(min));
    }

    /// Replaces only the upper scale bound.
    pub fn set_max_scale(&mut self, max: f64) {
        self.set_scale_bounds(self.min_scale.min(max), max);
    }

    /// Sets the origin clamp mode.
    pub fn set_origin_clamp(&mut self, mode: OriginClamp) {
        if self.origin_clamp != mode {
            self.origin_clamp = mode;
            self.clamp_origin();
            self.rebuild_transforms();
        }
    }

    /// Returns the origin clamp mode.
    #[must_use]
    pub fn origin_clamp(&self) -> OriginClamp {
        self.origin_clamp
    }

    /// Pans by a scroll distance in screen units.
    ///
    /// `delta` follows the platform scroll convention (previous pointer
    /// position minus current), and the rule is always
    /// `origin -= delta / scale`, so a fixed screen drag moves the content by
    /// the same number of screen pixels at every scale.
    pub fn pan(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return;
        }
        self.origin -= delta / self.scale;
        self.clamp_origin();
        self.rebuild_transforms();
    }

    /// Multiplies the scale by `factor` while keeping the screen point
    /// `focal` stationary.
    ///
    /// Returns `false` and leaves the transform untouched when `factor` is
    /// below [`MIN_ZOOM_FACTOR`] or not finite.
    pub fn zoom_by(&mut self, factor: f64, focal: Point) -> bool {
        if !factor.is_finite() || factor < MIN_ZOOM_FACTOR || !focal.is_finite() {
            return false;
        }
        let old_scale = self.scale;
        let new_scale = (old_scale * factor).clamp(self.min_scale, self.max_scale);

        // Move the focal point to the local origin, rescale, and move it back.
        let focal = focal.to_vec2();
        self.origin -= focal / old_scale;
        self.scale = new_scale;
        self.origin += focal / new_scale;

        self.clamp_origin();
        self.rebuild_transforms();
        true
    }

    /// Converts a logical diagram point into screen coordinates.
    #[must_use]
    pub fn to_screen(&self, logical: Point) -> Point {
        self.logical_to_screen * logical
    }

    /// Converts a screen point into logical diagram coordinates.
    #[must_use]
    pub fn to_logical(&self, screen: Point) -> Point {
        self.screen_to_logical * screen
    }

    /// Returns the logical-space rectangle currently covered by the viewport.
    #[must_use]
    pub fn visible_logical_rect(&self) -> Rect {
        let p0 = self.to_logical(Point::ORIGIN);
        let p1 = self.to_logical(Point::new(self.viewport.width, self.viewport.height));
        Rect::from_points(p0, p1)
    }

    /// Returns the logical → screen affine.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.logical_to_screen
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewTransformDebugInfo {
        ViewTransformDebugInfo {
            viewport: self.viewport,
            origin: self.origin,
            scale: self.scale,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            origin_clamp: self.origin_clamp,
            visible_logical_rect: self.visible_logical_rect(),
        }
    }

    fn rebuild_transforms(&mut self) {
        // Logical → screen: translate by origin, then scale.
        self.logical_to_screen = Affine::scale(self.scale) * Affine::translate(self.origin);
        self.screen_to_logical = self.logical_to_screen.inverse();
    }

    fn clamp_origin(&mut self) {
        if self.origin_clamp == OriginClamp::Free {
            return;
        }
        let w = self.viewport.width.max(0.0);
        let h = self.viewport.height.max(0.0);
        self.origin = Vec2::new(self.origin.x.clamp(0.0, w), self.origin.y.clamp(0.0, h));
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

/// Debug snapshot of a [`ViewTransform`].
#[derive(Clone, Copy, Debug)]
pub struct ViewTransformDebugInfo {
    /// Viewport size in screen units.
    pub viewport: Size,
    /// Current pan offset.
    pub origin: Vec2,
    /// Current scale factor.
    pub scale: f64,
    /// Lower scale bound.
    pub min_scale: f64,
    /// Upper scale bound.
    pub max_scale: f64,
    /// Origin clamp mode.
    pub origin_clamp: OriginClamp,
    /// Logical rectangle currently covered by the viewport.
    pub visible_logical_rect: Rect,
}
