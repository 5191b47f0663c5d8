// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vecdiagram_canvas --heading-base-level=0

//! Vecdiagram Canvas: the drawing collaborator of a vector diagram.
//!
//! The diagram core only decides *what* to draw and under which transform.
//! Pixels are produced by an external canvas that implements [`Canvas`]:
//!
//! - Transform stack: [`Canvas::save`], [`Canvas::restore`],
//!   [`Canvas::translate`], [`Canvas::scale`].
//! - Primitives: lines, filled/stroked polygons, circles, and text.
//! - Viewport queries: [`Canvas::width`] and [`Canvas::height`].
//!
//! Paint state is passed by reference with every primitive as an immutable
//! [`Paint`] value; nothing is mutated behind the caller's back.
//!
//! [`RecordingCanvas`] is a stateful implementation that does not rasterize.
//! It records every call together with the transform in effect, for tests
//! and debugging that want to assert on emitted commands.
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use vecdiagram_canvas::{Canvas, CanvasExt, Paint, RecordingCanvas};
//!
//! let mut canvas = RecordingCanvas::new(Size::new(200.0, 100.0));
//! canvas.with_saved(|c| {
//!     c.scale(2.0);
//!     c.translate(Vec2::new(10.0, 0.0));
//!     c.draw_line(Point::ORIGIN, Point::new(5.0, 0.0), &Paint::default());
//! });
//! assert_eq!(canvas.draws().count(), 1);
//! ```

#![no_std]

extern crate alloc;

mod paint;
mod recording;

use kurbo::{Point, Vec2};

pub use paint::{Dash, Paint, PaintStyle};
pub use peniko::Color;
pub use recording::{DrawCommand, RecordedCommand, RecordingCanvas};
pub use vecdiagram_geometry::TextAlign;

/// Minimal immediate-mode canvas.
///
/// Transform calls compose onto the current transform the way most 2D
/// canvases do: after `scale(s)` then `translate(t)`, a point `p` lands at
/// `(p + t) * s`.
pub trait Canvas {
    /// Width of the drawable area in device units.
    fn width(&self) -> f64;

    /// Height of the drawable area in device units.
    fn height(&self) -> f64;

    /// Push the current transform.
    fn save(&mut self);

    /// Pop to the most recently saved transform.
    fn restore(&mut self);

    /// Concatenate a translation onto the current transform.
    fn translate(&mut self, offset: Vec2);

    /// Concatenate a uniform scale onto the current transform.
    fn scale(&mut self, factor: f64);

    /// Draw a straight segment.
    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint);

    /// Draw a closed polygon.
    fn draw_polygon(&mut self, points: &[Point], paint: &Paint);

    /// Draw a circle.
    fn draw_circle(&mut self, center: Point, radius: f64, paint: &Paint);

    /// Draw a single line of text. `anchor` is the vertical middle of the
    /// line; `align` picks which horizontal edge (or center) sits on it.
    fn draw_text(&mut self, text: &str, anchor: Point, align: TextAlign, paint: &Paint);
}

/// Convenience helpers for [`Canvas`] callers.
///
/// This is separate from [`Canvas`] so that methods can accept closures
/// without complicating trait object usage (`&mut dyn Canvas`).
pub trait CanvasExt: Canvas {
    /// Run `f` between a [`Canvas::save`] and its matching [`Canvas::restore`].
    ///
    /// Note: if `f` panics, the transform is not restored.
    #[inline]
    fn with_saved<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.save();
        let out = f(self);
        self.restore();
        out
    }
}

impl<C: Canvas + ?Sized> CanvasExt for C {}
