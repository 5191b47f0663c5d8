// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vecdiagram_gesture --heading-base-level=0

//! Vecdiagram Gesture: turn pointer streams into pan and pinch-zoom updates.
//!
//! The centerpiece is [`GestureController`], an explicit state machine over
//! one pointer sequence (first pointer down to last pointer up):
//!
//! - **Idle**: nothing pressed, or a press that has not moved past the touch slop.
//! - **Dragging**: one pointer pans the [`ViewTransform`](vecdiagram_view2d::ViewTransform).
//! - **Pinching**: two pointers zoom it about their midpoint.
//!
//! Smaller building blocks are public too:
//!
//! - [`drag`]: per-event movement and slop detection for one pointer.
//! - [`pinch`]: span ratio and focal point for two pointers.
//! - [`tap`]: tap / double-tap classification.
//!
//! Taps and double taps are recognized but have no camera effect; they are
//! reported to the caller so a higher layer can attach behavior later.
//!
//! The controller never draws. After each accepted camera update it calls
//! [`RedrawHost::request_redraw`] once; rejected or inert input does not.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use vecdiagram_gesture::{GestureController, GestureOutcome, PointerEvent};
//! use vecdiagram_view2d::ViewTransform;
//!
//! let mut view = ViewTransform::new(Size::new(800.0, 600.0));
//! let mut gestures = GestureController::default();
//! let mut redraws = 0;
//! let mut host = || redraws += 1;
//!
//! gestures.handle_pointer(PointerEvent::down(1, Point::new(100.0, 100.0), 0), &mut view, &mut host);
//! let out = gestures.handle_pointer(
//!     PointerEvent::moved(1, Point::new(140.0, 100.0), 16),
//!     &mut view,
//!     &mut host,
//! );
//! assert!(matches!(out, GestureOutcome::Panned(_)));
//! assert_eq!(redraws, 1);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use core::fmt;

mod controller;
pub mod drag;
pub mod pinch;
pub mod tap;

pub use controller::{
    GestureController, GestureOutcome, GestureState, PointerEvent, PointerId, PointerPhase,
};
pub use pinch::PinchUpdate;

/// Receives "needs redraw" signals from the controller.
///
/// This is the invalidate/request-repaint hook of the host's rendering loop.
pub trait RedrawHost {
    /// Schedule a repaint of the diagram surface.
    fn request_redraw(&mut self);
}

impl<F: FnMut()> RedrawHost for F {
    fn request_redraw(&mut self) {
        self();
    }
}

/// Tuning knobs for gesture recognition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Distance in screen units a press must travel before it becomes a drag.
    pub touch_slop: f64,
    /// Longest press, in milliseconds, that still counts as a tap.
    pub tap_timeout_ms: u64,
    /// Longest gap, in milliseconds, between two taps of a double tap.
    pub double_tap_timeout_ms: u64,
    /// Largest distance in screen units between two taps of a double tap.
    pub double_tap_slop: f64,
    /// Pinch steps with a smaller scale factor are dropped.
    pub min_scale_factor: f64,
    /// Derive pinch-zoom from raw two-pointer moves.
    ///
    /// Disable this when the host feeds a platform pinch recognizer through
    /// [`GestureController::handle_pinch`] instead.
    pub pointer_pinch: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: 8.0,
            tap_timeout_ms: 300,
            double_tap_timeout_ms: 300,
            double_tap_slop: 32.0,
            min_scale_factor: vecdiagram_view2d::MIN_ZOOM_FACTOR,
            pointer_pinch: true,
        }
    }
}

/// A pinch step whose scale factor was too small (or not finite) to apply.
///
/// This never reaches the host as an error; the step is dropped and reported
/// through [`GestureOutcome::Rejected`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegenerateGesture {
    /// The rejected scale factor.
    pub scale_factor: f64,
}

impl fmt::Display for DegenerateGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pinch scale factor {} is below the accepted minimum",
            self.scale_factor
        )
    }
}

impl core::error::Error for DegenerateGesture {}
