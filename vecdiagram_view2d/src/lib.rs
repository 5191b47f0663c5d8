// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vecdiagram View 2D: the pan/zoom camera of a vector diagram surface.
//!
//! [`ViewTransform`] maps logical diagram coordinates to screen coordinates
//! with a translate-then-scale rule:
//!
//! ```text
//! screen = (logical + origin) * scale
//! ```
//!
//! It provides:
//! - Panning by a screen-space scroll distance with a single, scale-uniform rule.
//! - Zooming about a focal point (the point under a pinch stays put).
//! - Scale bounds that always hold after any mutation.
//! - Conversions in both directions and the visible logical extent.
//!
//! It does **not** interpret input events or draw anything. Gesture
//! interpretation lives in `vecdiagram_gesture`; drawing lives in
//! `vecdiagram`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use vecdiagram_view2d::ViewTransform;
//!
//! let mut view = ViewTransform::new(Size::new(800.0, 600.0));
//! view.set_scale_bounds(0.3, 3.0);
//!
//! // Drag left by 10 px: the content follows the finger.
//! view.pan(Vec2::new(10.0, 0.0));
//!
//! // Pinch out around (400, 300).
//! let focal = Point::new(400.0, 300.0);
//! let under_focal = view.to_logical(focal);
//! assert!(view.zoom_by(1.5, focal));
//! let again = view.to_screen(under_focal);
//! assert!((again.x - focal.x).abs() < 1e-9);
//!
//! // Degenerate pinch updates are rejected without touching state.
//! assert!(!view.zoom_by(0.005, focal));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod modes;
mod view_transform;

pub use modes::OriginClamp;
pub use view_transform::{
    DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, MIN_ZOOM_FACTOR, ViewTransform, ViewTransformDebugInfo,
};
