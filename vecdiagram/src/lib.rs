// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vecdiagram --heading-base-level=0

//! Vecdiagram: interactive polar vector diagrams.
//!
//! A diagram is a set of named rays drawn from a common origin, each with a
//! reference circle, an arrowhead, and a label placed so it never sits on
//! its own line. The user pans with one finger and pinch-zooms with two.
//!
//! This crate ties the building blocks together:
//!
//! - [`VectorStore`]: label-keyed records with upsert semantics and
//!   restartable snapshots.
//! - [`DiagramRenderer`]: turns a camera and a store into canvas calls, in a
//!   fixed order, without keeping state between frames.
//! - [`DiagramSurface`]: the host-facing object. It owns the store, the
//!   [`ViewTransform`], and the [`GestureController`], and exposes
//!   `add_vector`, `remove_vector`, and the scale bound setters.
//!
//! Drawing goes through the [`Canvas`] trait; [`RecordingCanvas`] records the
//! calls instead of rasterizing them.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use vecdiagram::{DiagramSurface, PointerEvent, RecordingCanvas, VectorStyle};
//!
//! let mut surface = DiagramSurface::default();
//! surface.on_layout(Size::new(800.0, 600.0));
//! surface.add_vector("F", 45.0, 100, VectorStyle::default()).unwrap();
//!
//! // One-finger drag pans the diagram.
//! let mut redraws = 0;
//! let mut host = || redraws += 1;
//! surface.handle_pointer(PointerEvent::down(0, Point::new(400.0, 300.0), 0), &mut host);
//! surface.handle_pointer(PointerEvent::moved(0, Point::new(450.0, 300.0), 16), &mut host);
//! surface.handle_pointer(PointerEvent::up(0, Point::new(450.0, 300.0), 32), &mut host);
//! assert_eq!(redraws, 1);
//!
//! let mut canvas = RecordingCanvas::new(Size::new(800.0, 600.0));
//! surface.render(&mut canvas);
//! // Grid (2 lines) + circle, line, arrowhead, label.
//! assert_eq!(canvas.draws().count(), 6);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod render;
mod store;
mod surface;

pub use config::{AngleConvention, CircleRadius, RenderConfig, SurfaceConfig};
pub use render::{DiagramRenderer, VectorFrame};
pub use store::{InvalidVectorError, VectorList, VectorRecord, VectorStore, VectorStyle};
pub use surface::DiagramSurface;

pub use vecdiagram_canvas::{
    Canvas, CanvasExt, Color, Dash, DrawCommand, Paint, PaintStyle, RecordedCommand,
    RecordingCanvas,
};
pub use vecdiagram_geometry::{
    Arrowhead, ArrowheadSpec, LabelAnchor, LabelPolicy, Octant, TextAlign,
};
pub use vecdiagram_gesture::{
    DegenerateGesture, GestureConfig, GestureController, GestureOutcome, GestureState,
    PinchUpdate, PointerEvent, PointerId, PointerPhase, RedrawHost,
};
pub use vecdiagram_view2d::{OriginClamp, ViewTransform, ViewTransformDebugInfo};
