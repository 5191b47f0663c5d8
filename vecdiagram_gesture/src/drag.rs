// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-pointer drag tracking: per-event movement and slop detection.
//!
//! ## Usage
//!
//! 1) Call [`DragTracker::start`] with the pointer-down position.
//! 2) Check [`DragTracker::exceeds_slop`] to decide whether a press has
//!    turned into a drag (rather than a tap).
//! 3) On each move event, call [`DragTracker::update`] to get the movement
//!    since the previous event.
//! 4) Call [`DragTracker::rebase`] when the reference pointer changes (for
//!    example when a pinch drops back to one finger) so the next delta is
//!    measured from the current position instead of jumping.
//! 5) End with [`DragTracker::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use vecdiagram_gesture::drag::DragTracker;
//!
//! let mut drag = DragTracker::default();
//! drag.start(Point::new(10.0, 20.0));
//!
//! assert!(!drag.exceeds_slop(Point::new(12.0, 21.0), 8.0));
//! assert_eq!(drag.update(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! ```

use kurbo::{Point, Vec2};

/// Tracks the reference positions of a single dragging pointer.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragTracker {
    /// Position where the drag started.
    pub start_pos: Option<Point>,
    /// Position of the previous event; deltas are measured from here.
    pub last_pos: Option<Point>,
}

impl DragTracker {
    /// Start tracking from the given position.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Record a new position and return the movement since the previous one.
    ///
    /// Returns `None` when no drag is being tracked.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        if self.start_pos.is_none() {
            return None;
        }
        let last = self.last_pos.replace(pos)?;
        Some(pos - last)
    }

    /// Measure subsequent deltas from `pos` without emitting movement.
    pub fn rebase(&mut self, pos: Point) {
        if self.start_pos.is_none() {
            self.start_pos = Some(pos);
        }
        self.last_pos = Some(pos);
    }

    /// Returns `true` once `pos` is farther than `slop` from the start position.
    pub fn exceeds_slop(&self, pos: Point, slop: f64) -> bool {
        self.start_pos
            .is_some_and(|start| (pos - start).hypot2() > slop * slop)
    }

    /// Stop tracking.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` while a drag is being tracked.
    pub fn is_active(&self) -> bool {
        self.start_pos.is_some()
    }
}
