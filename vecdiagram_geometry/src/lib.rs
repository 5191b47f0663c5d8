// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vecdiagram Geometry: what to draw for one polar vector.
//!
//! Everything here is a pure function of its inputs, so identical inputs
//! always produce identical geometry and rendering stays deterministic.
//!
//! - [`endpoint`]: tip of a vector from origin, angle, and length.
//! - [`line_angle`] / [`arrowhead_triangle`] / [`arrowhead_for`]: the filled
//!   triangle at the tip, aligned with the line actually drawn.
//! - [`Octant`] / [`label_anchor`]: where to put a label so it stays clear of
//!   the line it annotates.
//!
//! Angles are radians in screen space (y grows downward) unless a name says
//! `degrees`.
//!
//! ```rust
//! use kurbo::Point;
//! use vecdiagram_geometry::{ArrowheadSpec, arrowhead_for, endpoint};
//!
//! let tip = endpoint(Point::ORIGIN, core::f64::consts::FRAC_PI_4, 100.0);
//! assert!((tip.x - 70.7).abs() < 0.1 && (tip.y - 70.7).abs() < 0.1);
//!
//! let head = arrowhead_for(Point::ORIGIN, tip, ArrowheadSpec::default()).unwrap();
//! assert_eq!(head.tip, tip);
//!
//! // Zero-length vectors have no arrowhead at all.
//! assert!(arrowhead_for(Point::ORIGIN, Point::ORIGIN, ArrowheadSpec::default()).is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod angle;
mod arrow;
mod label;

pub use angle::{degrees_to_radians, normalize_degrees, radians_to_degrees};
pub use arrow::{Arrowhead, ArrowheadSpec, arrowhead_for, arrowhead_triangle, endpoint, line_angle};
pub use label::{DEFAULT_LABEL_MARGIN, LabelAnchor, LabelPolicy, Octant, TextAlign, label_anchor};
