// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use peniko::color::palette::css;

/// How a primitive is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PaintStyle {
    /// Outline only.
    #[default]
    Stroke,
    /// Interior only.
    Fill,
    /// Interior and outline.
    FillAndStroke,
}

/// A dash pattern: `on` units drawn, `off` units skipped, starting at `phase`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dash {
    /// Length of each drawn segment.
    pub on: f64,
    /// Length of each gap.
    pub off: f64,
    /// Offset into the pattern at the start of the stroke.
    pub phase: f64,
}

impl Dash {
    /// Creates a dash pattern starting at phase zero.
    #[must_use]
    pub const fn new(on: f64, off: f64) -> Self {
        Self { on, off, phase: 0.0 }
    }
}

/// Immutable paint description handed to every [`Canvas`](crate::Canvas) primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    /// Color for strokes, fills, and text.
    pub color: Color,
    /// Stroke width in local units.
    pub stroke_width: f64,
    /// Paint style.
    pub style: PaintStyle,
    /// Optional dash pattern for strokes.
    pub dash: Option<Dash>,
    /// Text size in local units.
    pub text_size: f64,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: css::BLACK,
            stroke_width: 1.0,
            style: PaintStyle::Stroke,
            dash: None,
            text_size: 14.0,
        }
    }
}

impl Paint {
    /// Stroke paint with the given color and width.
    #[must_use]
    pub fn stroke(color: Color, stroke_width: f64) -> Self {
        Self {
            color,
            stroke_width,
            ..Self::default()
        }
    }

    /// Returns a copy with a different style.
    #[must_use]
    pub fn with_style(self, style: PaintStyle) -> Self {
        Self { style, ..self }
    }

    /// Returns a copy with a dash pattern.
    #[must_use]
    pub fn with_dash(self, dash: Dash) -> Self {
        Self {
            dash: Some(dash),
            ..self
        }
    }

    /// Returns a copy with a different text size.
    #[must_use]
    pub fn with_text_size(self, text_size: f64) -> Self {
        Self { text_size, ..self }
    }
}
