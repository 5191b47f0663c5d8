// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Affine, Point, Size, Vec2};

use crate::{Canvas, Paint, TextAlign};

/// A single canvas call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`Canvas::save`].
    Save,
    /// [`Canvas::restore`].
    Restore,
    /// [`Canvas::translate`].
    Translate(Vec2),
    /// [`Canvas::scale`].
    Scale(f64),
    /// [`Canvas::draw_line`].
    Line {
        /// Start point in local coordinates.
        from: Point,
        /// End point in local coordinates.
        to: Point,
        /// Paint used.
        paint: Paint,
    },
    /// [`Canvas::draw_polygon`].
    Polygon {
        /// Corners in local coordinates.
        points: Vec<Point>,
        /// Paint used.
        paint: Paint,
    },
    /// [`Canvas::draw_circle`].
    Circle {
        /// Center in local coordinates.
        center: Point,
        /// Radius in local units.
        radius: f64,
        /// Paint used.
        paint: Paint,
    },
    /// [`Canvas::draw_text`].
    Text {
        /// Text content.
        text: String,
        /// Anchor in local coordinates.
        anchor: Point,
        /// Horizontal alignment.
        align: TextAlign,
        /// Paint used.
        paint: Paint,
    },
}

impl DrawCommand {
    /// Returns `true` for primitives (as opposed to transform stack calls).
    #[must_use]
    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            Self::Line { .. } | Self::Polygon { .. } | Self::Circle { .. } | Self::Text { .. }
        )
    }
}

/// A command and the transform that was current when it was issued.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCommand {
    /// The canvas call.
    pub command: DrawCommand,
    /// Local → device transform after applying `command`.
    pub transform: Affine,
}

/// Canvas that records calls instead of rasterizing.
///
/// This canvas:
/// - Tracks the current transform and a save/restore stack,
/// - Records a [`RecordedCommand`] for every call, in order,
/// - Treats an unmatched [`Canvas::restore`] as a no-op (it is still recorded).
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    size: Size,
    transform: Affine,
    stack: Vec<Affine>,
    commands: Vec<RecordedCommand>,
}

impl RecordingCanvas {
    /// Creates an empty recording with the given drawable size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// All recorded commands in call order.
    #[must_use]
    pub fn commands(&self) -> &[RecordedCommand] {
        &self.commands
    }

    /// Only the primitive draw commands, in call order.
    pub fn draws(&self) -> impl Iterator<Item = &RecordedCommand> + '_ {
        self.commands.iter().filter(|c| c.command.is_draw())
    }

    /// Current local → device transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Number of outstanding [`Canvas::save`] calls.
    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// Clears recorded commands and resets the transform stack.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.stack.clear();
        self.transform = Affine::IDENTITY;
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(RecordedCommand {
            command,
            transform: self.transform,
        });
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> f64 {
        self.size.width
    }

    fn height(&self) -> f64 {
        self.size.height
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
        self.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(saved) => self.transform = saved,
            None => tracing::debug!("restore without matching save"),
        }
        self.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform *= Affine::translate(offset);
        self.push(DrawCommand::Translate(offset));
    }

    fn scale(&mut self, factor: f64) {
        self.transform *= Affine::scale(factor);
        self.push(DrawCommand::Scale(factor));
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) {
        self.push(DrawCommand::Line {
            from,
            to,
            paint: *paint,
        });
    }

    fn draw_polygon(&mut self, points: &[Point], paint: &Paint) {
        self.push(DrawCommand::Polygon {
            points: points.to_vec(),
            paint: *paint,
        });
    }

    fn draw_circle(&mut self, center: Point, radius: f64, paint: &Paint) {
        self.push(DrawCommand::Circle {
            center,
            radius,
            paint: *paint,
        });
    }

    fn draw_text(&mut self, text: &str, anchor: Point, align: TextAlign, paint: &Paint) {
        self.push(DrawCommand::Text {
            text: text.to_string(),
            anchor,
            align,
            paint: *paint,
        });
    }
}
