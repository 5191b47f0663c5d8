// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`Canvas`] that writes SVG elements.
//!
//! Good enough to look at a frame in a browser. Text metrics are left to the
//! SVG viewer; `dominant-baseline="middle"` puts the anchor at the vertical
//! middle of the line.

use std::fmt::Write as _;

use kurbo::{Affine, Point, Vec2};
use peniko::Color;
use vecdiagram::{Canvas, Paint, PaintStyle, TextAlign};

/// Immediate-mode canvas producing an SVG document.
#[derive(Debug)]
pub struct SvgCanvas {
    width: f64,
    height: f64,
    transform: Affine,
    stack: Vec<Affine>,
    body: String,
}

impl SvgCanvas {
    /// Creates an empty canvas with a white background.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            transform: Affine::IDENTITY,
            stack: Vec::new(),
            body: String::new(),
        }
    }

    /// Finishes the document.
    pub fn finish(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
             <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }

    fn open_group(&mut self) {
        let c = self.transform.as_coeffs();
        let _ = writeln!(
            self.body,
            "<g transform=\"matrix({} {} {} {} {} {})\">",
            c[0], c[1], c[2], c[3], c[4], c[5]
        );
    }

    fn element(&mut self, element: &str) {
        self.open_group();
        let _ = writeln!(self.body, "  {element}\n</g>");
    }
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn paint_attrs(paint: &Paint) -> String {
    let (color, alpha) = color_to_svg(paint.color);
    let fill = match paint.style {
        PaintStyle::Stroke => String::from("fill=\"none\""),
        PaintStyle::Fill | PaintStyle::FillAndStroke => {
            format!("fill=\"{color}\" fill-opacity=\"{alpha}\"")
        }
    };
    let mut stroke = match paint.style {
        PaintStyle::Fill => String::new(),
        PaintStyle::Stroke | PaintStyle::FillAndStroke => format!(
            " stroke=\"{color}\" stroke-opacity=\"{alpha}\" stroke-width=\"{}\"",
            paint.stroke_width
        ),
    };
    if let Some(dash) = paint.dash {
        let _ = write!(
            stroke,
            " stroke-dasharray=\"{} {}\" stroke-dashoffset=\"{}\"",
            dash.on, dash.off, dash.phase
        );
    }
    format!("{fill}{stroke}")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl Canvas for SvgCanvas {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(saved) = self.stack.pop() {
            self.transform = saved;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform *= Affine::translate(offset);
    }

    fn scale(&mut self, factor: f64) {
        self.transform *= Affine::scale(factor);
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) {
        let attrs = paint_attrs(&Paint {
            style: PaintStyle::Stroke,
            ..*paint
        });
        self.element(&format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {attrs}/>",
            from.x, from.y, to.x, to.y
        ));
    }

    fn draw_polygon(&mut self, points: &[Point], paint: &Paint) {
        let mut list = String::new();
        for p in points {
            let _ = write!(list, "{},{} ", p.x, p.y);
        }
        let attrs = paint_attrs(paint);
        self.element(&format!("<polygon points=\"{}\" {attrs}/>", list.trim_end()));
    }

    fn draw_circle(&mut self, center: Point, radius: f64, paint: &Paint) {
        let attrs = paint_attrs(paint);
        self.element(&format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{radius}\" {attrs}/>",
            center.x, center.y
        ));
    }

    fn draw_text(&mut self, text: &str, anchor: Point, align: TextAlign, paint: &Paint) {
        let (color, alpha) = color_to_svg(paint.color);
        let text_anchor = match align {
            TextAlign::Start => "start",
            TextAlign::Center => "middle",
            TextAlign::End => "end",
        };
        self.element(&format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"{text_anchor}\" \
             dominant-baseline=\"middle\" fill=\"{color}\" fill-opacity=\"{alpha}\">{}</text>",
            anchor.x,
            anchor.y,
            paint.text_size,
            escape(text)
        ));
    }
}
