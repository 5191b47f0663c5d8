// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface and rendering configuration.

use peniko::color::palette::css;
use vecdiagram_canvas::{Dash, Paint};
use vecdiagram_geometry::{ArrowheadSpec, LabelPolicy, degrees_to_radians, radians_to_degrees};
use vecdiagram_gesture::GestureConfig;
use vecdiagram_view2d::OriginClamp;

/// How user-facing degrees map onto screen directions.
///
/// Screen y grows downward, so an unmodified angle sweeps clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AngleConvention {
    /// Positive angles sweep counter-clockwise on screen (90° points up).
    ///
    /// Input degrees are negated before they are stored.
    #[default]
    CounterClockwise,
    /// Positive angles sweep clockwise on screen (90° points down).
    Clockwise,
}

impl AngleConvention {
    /// Converts user-facing degrees into stored screen radians.
    #[must_use]
    pub fn to_screen_radians(self, degrees: f64) -> f64 {
        match self {
            Self::CounterClockwise => degrees_to_radians(-degrees),
            Self::Clockwise => degrees_to_radians(degrees),
        }
    }

    /// Converts stored screen radians back into user-facing degrees.
    #[must_use]
    pub fn to_user_degrees(self, radians: f64) -> f64 {
        match self {
            Self::CounterClockwise => -radians_to_degrees(radians),
            Self::Clockwise => radians_to_degrees(radians),
        }
    }
}

/// Radius of the reference circle drawn around the origin for each vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CircleRadius {
    /// The circle passes through the tip.
    #[default]
    Length,
    /// Half the vector length.
    HalfLength,
}

impl CircleRadius {
    /// Radius for a vector of the given length.
    #[must_use]
    pub fn radius(self, length: f64) -> f64 {
        match self {
            Self::Length => length,
            Self::HalfLength => length / 2.0,
        }
    }
}

/// Presentation settings used by [`DiagramRenderer`](crate::DiagramRenderer).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    /// Mapping between user degrees and screen directions.
    pub angle_convention: AngleConvention,
    /// Reference circle radius policy.
    pub circle_radius: CircleRadius,
    /// Arrowhead size and opening.
    pub arrowhead: ArrowheadSpec,
    /// Label placement.
    pub label: LabelPolicy,
    /// Paint of the two ruler lines through the origin.
    pub grid: Paint,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            angle_convention: AngleConvention::default(),
            circle_radius: CircleRadius::default(),
            arrowhead: ArrowheadSpec::default(),
            label: LabelPolicy::default(),
            grid: Paint::stroke(css::DARK_GRAY, 2.0).with_dash(Dash::new(10.0, 10.0)),
        }
    }
}

/// Everything a [`DiagramSurface`](crate::DiagramSurface) is built from.
///
/// ```rust
/// use vecdiagram::{CircleRadius, SurfaceConfig};
///
/// let config = SurfaceConfig::default()
///     .with_scale_bounds(0.5, 4.0)
///     .with_circle_radius(CircleRadius::HalfLength);
/// assert_eq!(config.min_scale, 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceConfig {
    /// Scale before any gesture.
    pub initial_scale: f64,
    /// Lower scale bound.
    pub min_scale: f64,
    /// Upper scale bound.
    pub max_scale: f64,
    /// Origin clamping policy.
    pub origin_clamp: OriginClamp,
    /// Rendering settings.
    pub render: RenderConfig,
    /// Gesture recognition tuning.
    pub gesture: GestureConfig,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            initial_scale: 0.5,
            min_scale: 0.3,
            max_scale: 3.0,
            origin_clamp: OriginClamp::Free,
            render: RenderConfig::default(),
            gesture: GestureConfig::default(),
        }
    }
}

impl SurfaceConfig {
    /// Sets the initial scale.
    #[must_use]
    pub fn with_initial_scale(mut self, scale: f64) -> Self {
        self.initial_scale = scale;
        self
    }

    /// Sets both scale bounds.
    #[must_use]
    pub fn with_scale_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_scale = min;
        self.max_scale = max;
        self
    }

    /// Sets the origin clamp.
    #[must_use]
    pub fn with_origin_clamp(mut self, clamp: OriginClamp) -> Self {
        self.origin_clamp = clamp;
        self
    }

    /// Sets the angle convention.
    #[must_use]
    pub fn with_angle_convention(mut self, convention: AngleConvention) -> Self {
        self.render.angle_convention = convention;
        self
    }

    /// Sets the reference circle radius policy.
    #[must_use]
    pub fn with_circle_radius(mut self, radius: CircleRadius) -> Self {
        self.render.circle_radius = radius;
        self
    }

    /// Sets the arrowhead.
    #[must_use]
    pub fn with_arrowhead(mut self, arrowhead: ArrowheadSpec) -> Self {
        self.render.arrowhead = arrowhead;
        self
    }

    /// Sets the gesture tuning.
    #[must_use]
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }
}
