// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame rendering.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Line, Point};
use vecdiagram_canvas::{Canvas, CanvasExt, PaintStyle};
use vecdiagram_geometry::{
    Arrowhead, LabelAnchor, arrowhead_for, endpoint, normalize_degrees, radians_to_degrees,
};
use vecdiagram_view2d::ViewTransform;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::config::RenderConfig;
use crate::store::{VectorRecord, VectorStore, VectorStyle};

/// Computed geometry of one vector, in logical coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorFrame {
    /// Label of the source record.
    pub label: String,
    /// Tip of the vector.
    pub tip: Point,
    /// Reference circle radius.
    pub circle_radius: f64,
    /// Main line, `None` for zero-length vectors.
    pub line: Option<Line>,
    /// Arrowhead, `None` for zero-length vectors.
    pub arrowhead: Option<Arrowhead>,
    /// Label placement.
    pub label_anchor: LabelAnchor,
    /// Label text.
    pub label_text: String,
    /// Drawing style.
    pub style: VectorStyle,
}

/// Draws the grid and every stored vector.
///
/// Rendering is a pure function of the [`ViewTransform`] and the
/// [`VectorStore`]: the renderer keeps no state between frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DiagramRenderer {
    config: RenderConfig,
}

impl DiagramRenderer {
    /// Creates a renderer.
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The render configuration.
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Replaces the render configuration.
    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }

    /// Geometry of every vector in label order, without drawing.
    #[must_use]
    pub fn frame_geometry(&self, store: &VectorStore) -> Vec<VectorFrame> {
        store.list().iter().map(|r| self.frame_for(r)).collect()
    }

    /// Geometry of a single record.
    ///
    /// The label octant is chosen from the drawn direction measured
    /// counter-clockwise on screen and wrapped into `[0, 360)`, so the
    /// magnitude rule of [`Octant::from_degrees`] sees a non-negative angle.
    ///
    /// [`Octant::from_degrees`]: vecdiagram_geometry::Octant::from_degrees
    #[must_use]
    pub fn frame_for(&self, record: &VectorRecord) -> VectorFrame {
        let length = f64::from(record.length);
        let tip = endpoint(Point::ORIGIN, record.angle_radians, length);
        let arrowhead = arrowhead_for(Point::ORIGIN, tip, self.config.arrowhead);
        let line = (record.length > 0).then(|| Line::new(Point::ORIGIN, tip));

        // Octants are defined on the y-up math angle of the drawn direction.
        let screen_degrees = normalize_degrees(-radians_to_degrees(record.angle_radians));
        let label_anchor = self.config.label.anchor(tip, screen_degrees, length);

        VectorFrame {
            label: record.label.clone(),
            tip,
            circle_radius: self.config.circle_radius.radius(length),
            line,
            arrowhead,
            label_anchor,
            label_text: self.label_text(record),
            style: record.style,
        }
    }

    /// Renders one frame.
    ///
    /// Calls are issued in a fixed order: the transform (scale, then
    /// translate by the origin), the two grid lines, then per vector the
    /// circle, line, arrowhead, and label. Zero-length vectors skip the line
    /// and the arrowhead.
    pub fn render<C: Canvas + ?Sized>(
        &self,
        view: &ViewTransform,
        store: &VectorStore,
        canvas: &mut C,
    ) {
        let frames = self.frame_geometry(store);
        let top_left = view.to_logical(Point::ORIGIN);
        let bottom_right = view.to_logical(Point::new(canvas.width(), canvas.height()));

        canvas.with_saved(|canvas| {
            canvas.scale(view.scale());
            canvas.translate(view.origin());

            let grid = &self.config.grid;
            canvas.draw_line(
                Point::new(top_left.x, 0.0),
                Point::new(bottom_right.x, 0.0),
                grid,
            );
            canvas.draw_line(
                Point::new(0.0, top_left.y),
                Point::new(0.0, bottom_right.y),
                grid,
            );

            for frame in &frames {
                let stroke = frame.style.paint(PaintStyle::Stroke);
                canvas.draw_circle(Point::ORIGIN, frame.circle_radius, &stroke);
                if let Some(line) = frame.line {
                    canvas.draw_line(line.p0, line.p1, &stroke);
                }
                if let Some(head) = frame.arrowhead {
                    canvas.draw_polygon(&head.points(), &frame.style.paint(PaintStyle::FillAndStroke));
                }
                canvas.draw_text(
                    &frame.label_text,
                    frame.label_anchor.position,
                    frame.label_anchor.align,
                    &frame.style.paint(PaintStyle::Fill),
                );
            }
        });

        tracing::trace!(
            vectors = frames.len(),
            scale = view.scale(),
            origin = ?view.origin(),
            "rendered frame"
        );
    }

    fn label_text(&self, record: &VectorRecord) -> String {
        let degrees = self
            .config
            .angle_convention
            .to_user_degrees(record.angle_radians)
            .round();
        // Adding zero turns -0.0 into 0.0.
        format!("{}: {:.0}°, {}", record.label, degrees + 0.0, record.length)
    }
}
