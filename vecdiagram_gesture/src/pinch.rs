// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-pointer pinch tracking: scale-factor ratio and focal point.
//!
//! Each update compares the current distance between the two pointers with
//! the distance at the previous update, so factors compose multiplicatively
//! across a gesture. The focal point is the current midpoint.
//!
//! ```
//! use kurbo::Point;
//! use vecdiagram_gesture::pinch::{PinchSample, PinchTracker};
//!
//! let mut pinch = PinchTracker::default();
//! pinch.start(PinchSample::from_pointers(Point::new(0.0, 0.0), Point::new(100.0, 0.0)));
//!
//! let update = pinch
//!     .update(PinchSample::from_pointers(Point::new(0.0, 0.0), Point::new(200.0, 0.0)))
//!     .unwrap();
//! assert_eq!(update.scale_factor, 2.0);
//! assert_eq!(update.focal, Point::new(100.0, 0.0));
//! ```

use kurbo::Point;

/// Spans shorter than this (in screen units) cannot serve as a ratio base.
pub const MIN_PINCH_SPAN: f64 = 1.0;

/// Distance and midpoint of the two pinching pointers at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSample {
    /// Distance between the pointers.
    pub span: f64,
    /// Midpoint between the pointers.
    pub focal: Point,
}

impl PinchSample {
    /// Builds a sample from two pointer positions.
    #[must_use]
    pub fn from_pointers(a: Point, b: Point) -> Self {
        Self {
            span: (b - a).hypot(),
            focal: a.midpoint(b),
        }
    }
}

/// One pinch step as produced by a pinch recognizer.
///
/// Hosts that already run a platform pinch recognizer can build this
/// directly and feed it to
/// [`GestureController::handle_pinch`](crate::GestureController::handle_pinch).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchUpdate {
    /// Ratio of the current span to the previous span.
    pub scale_factor: f64,
    /// Screen point the pinch is centered on.
    pub focal: Point,
}

/// Tracks the previous pinch span.
#[derive(Clone, Copy, Debug, Default)]
pub struct PinchTracker {
    last_span: Option<f64>,
}

impl PinchTracker {
    /// Start a pinch from the given sample.
    pub fn start(&mut self, sample: PinchSample) {
        self.last_span = Some(sample.span);
    }

    /// Record a new sample and return the step since the previous one.
    ///
    /// Returns `None` when no pinch is active, or when the previous span is
    /// too small to divide by; in that case the sample becomes the new base.
    pub fn update(&mut self, sample: PinchSample) -> Option<PinchUpdate> {
        let last = self.last_span.replace(sample.span)?;
        if last < MIN_PINCH_SPAN {
            return None;
        }
        Some(PinchUpdate {
            scale_factor: sample.span / last,
            focal: sample.focal,
        })
    }

    /// Stop tracking.
    pub fn end(&mut self) {
        self.last_span = None;
    }

    /// Returns `true` while a pinch is being tracked.
    pub fn is_active(&self) -> bool {
        self.last_span.is_some()
    }
}
