// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Octant-based label placement.
//!
//! The plane is split into eight octants: the four axis directions
//! (exactly 0°, 90°, 180°, 270°) and the four open ranges between them.
//! Each octant maps to a fixed screen-space offset and text alignment that
//! keep the label on the far side of the tip, away from the line.
//!
//! Angles here are mathematical (counter-clockwise on screen, so 90° points
//! up even though screen y grows downward).

use kurbo::{Point, Vec2};

/// Default distance between a vector tip and its label anchor.
pub const DEFAULT_LABEL_MARGIN: f64 = 16.0;

/// One of the eight angular ranges used to place labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Octant {
    /// Exactly 0°.
    East,
    /// Strictly between 0° and 90°.
    NorthEast,
    /// Exactly 90°.
    North,
    /// Strictly between 90° and 180°.
    NorthWest,
    /// Exactly 180°.
    West,
    /// Strictly between 180° and 270°.
    SouthWest,
    /// Exactly 270°.
    South,
    /// Strictly between 270° and 360°.
    SouthEast,
}

impl Octant {
    /// All octants in counter-clockwise order starting at 0°.
    pub const ALL: [Self; 8] = [
        Self::East,
        Self::NorthEast,
        Self::North,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
        Self::South,
        Self::SouthEast,
    ];

    /// Classifies an angle in degrees.
    ///
    /// The angle is normalized with `abs(degrees) mod 360` first. Non-finite
    /// input is treated as 0°.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        let d = if degrees.is_finite() {
            degrees.abs() % 360.0
        } else {
            0.0
        };
        if d == 0.0 {
            Self::East
        } else if d < 90.0 {
            Self::NorthEast
        } else if d == 90.0 {
            Self::North
        } else if d < 180.0 {
            Self::NorthWest
        } else if d == 180.0 {
            Self::West
        } else if d < 270.0 {
            Self::SouthWest
        } else if d == 270.0 {
            Self::South
        } else {
            Self::SouthEast
        }
    }

    /// Screen-space offset (y down) and alignment for this octant, in units
    /// of `margin`.
    #[must_use]
    pub fn placement(self, margin: f64) -> (Vec2, TextAlign) {
        let m = margin;
        match self {
            Self::East => (Vec2::new(m, 0.0), TextAlign::Start),
            Self::NorthEast => (Vec2::new(0.0, -m), TextAlign::Start),
            Self::North => (Vec2::new(0.0, -m), TextAlign::Center),
            Self::NorthWest => (Vec2::new(0.0, -m), TextAlign::End),
            Self::West => (Vec2::new(-m, 0.0), TextAlign::End),
            Self::SouthWest => (Vec2::new(-0.5 * m, m), TextAlign::End),
            Self::South => (Vec2::new(0.0, m), TextAlign::Center),
            Self::SouthEast => (Vec2::new(0.5 * m, m), TextAlign::Start),
        }
    }
}

/// Horizontal alignment of a label relative to its anchor point.
///
/// The anchor is the vertical middle of the text line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    /// Text begins at the anchor and runs right.
    #[default]
    Start,
    /// Text is centered on the anchor.
    Center,
    /// Text ends at the anchor.
    End,
}

/// Where and how to draw a vector's label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelAnchor {
    /// Octant the label angle fell into.
    pub octant: Octant,
    /// Offset from the tip.
    pub offset: Vec2,
    /// Anchor point (`tip + offset`).
    pub position: Point,
    /// Text alignment at the anchor.
    pub align: TextAlign,
}

/// Label placement parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPolicy {
    /// Distance between the tip and the label anchor.
    pub margin: f64,
}

impl Default for LabelPolicy {
    fn default() -> Self {
        Self {
            margin: DEFAULT_LABEL_MARGIN,
        }
    }
}

impl LabelPolicy {
    /// Anchor for the label of a vector whose tip is `endpoint`.
    ///
    /// A zero-length vector has no line to avoid, so its label always goes
    /// to the right of the tip.
    #[must_use]
    pub fn anchor(&self, endpoint: Point, angle_degrees: f64, length: f64) -> LabelAnchor {
        let octant = if length == 0.0 {
            Octant::East
        } else {
            Octant::from_degrees(angle_degrees)
        };
        let (offset, align) = octant.placement(self.margin);
        LabelAnchor {
            octant,
            offset,
            position: endpoint + offset,
            align,
        }
    }
}

/// [`LabelPolicy::anchor`] with the default margin.
#[must_use]
pub fn label_anchor(endpoint: Point, angle_degrees: f64, length: f64) -> LabelAnchor {
    LabelPolicy::default().anchor(endpoint, angle_degrees, length)
}
