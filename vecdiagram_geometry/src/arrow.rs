// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::angle::degrees_to_radians;

/// Size and opening of an arrowhead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowheadSpec {
    /// Distance from the tip to each wing.
    pub radius: f64,
    /// Full opening angle between the two wings, in degrees.
    pub head_angle_degrees: f64,
}

impl Default for ArrowheadSpec {
    fn default() -> Self {
        Self {
            radius: 20.0,
            head_angle_degrees: 45.0,
        }
    }
}

/// The three corners of a filled arrowhead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrowhead {
    /// Tip of the arrow (the vector endpoint).
    pub tip: Point,
    /// Wing at `line_angle - head_angle / 2`.
    pub left: Point,
    /// Wing at `line_angle + head_angle / 2`.
    pub right: Point,
}

impl Arrowhead {
    /// Corners in drawing order: tip, left wing, right wing.
    #[must_use]
    pub fn points(&self) -> [Point; 3] {
        [self.tip, self.left, self.right]
    }
}

/// Endpoint of a vector: `origin + length * (cos(angle), sin(angle))`.
#[inline]
#[must_use]
pub fn endpoint(origin: Point, angle_radians: f64, length: f64) -> Point {
    Point::new(
        origin.x + length * angle_radians.cos(),
        origin.y + length * angle_radians.sin(),
    )
}

/// Direction of the segment `origin → tip`.
///
/// Coincident points yield `0.0` (the `atan2(0, 0)` convention).
#[inline]
#[must_use]
pub fn line_angle(origin: Point, tip: Point) -> f64 {
    (tip.y - origin.y).atan2(tip.x - origin.x)
}

/// Arrowhead triangle for a line that arrives at `tip` with direction
/// `line_angle`.
#[must_use]
pub fn arrowhead_triangle(tip: Point, line_angle: f64, spec: ArrowheadSpec) -> Arrowhead {
    let half = degrees_to_radians(spec.head_angle_degrees) / 2.0;
    let wing = |a: f64| tip - spec.radius * Vec2::new(a.cos(), a.sin());
    Arrowhead {
        tip,
        left: wing(line_angle - half),
        right: wing(line_angle + half),
    }
}

/// Arrowhead for the rendered segment `origin → tip`.
///
/// The direction is recomputed from the two points rather than taken from a
/// stored angle, so the head always lines up with the drawn line. Returns
/// `None` for a zero-length segment.
#[must_use]
pub fn arrowhead_for(origin: Point, tip: Point, spec: ArrowheadSpec) -> Option<Arrowhead> {
    if origin == tip {
        return None;
    }
    Some(arrowhead_triangle(tip, line_angle(origin, tip), spec))
}
