// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builds a small force diagram, plays a drag and a pinch through the
//! gesture controller, and writes the final frame as SVG.
//!
//! Usage:
//!   `cargo run -p vecdiagram_demos --example diagram_svg -- out.svg`
//!
//! Set `RUST_LOG=debug` to watch gesture state changes.

use std::env;
use std::fs;

use kurbo::{Point, Size};
use peniko::color::palette::css;
use tracing_subscriber::EnvFilter;
use vecdiagram::{DiagramSurface, PointerEvent, SurfaceConfig, VectorStyle};
use vecdiagram_demos::svg_canvas::SvgCanvas;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = env::args().nth(1).unwrap_or_else(|| "vecdiagram.svg".to_owned());

    let mut surface = DiagramSurface::new(SurfaceConfig::default());
    surface.on_layout(Size::new(WIDTH, HEIGHT));

    surface.add_vector("F1", 30.0, 300, VectorStyle::new(css::CRIMSON, 4.0, 30.0))?;
    surface.add_vector("F2", 135.0, 220, VectorStyle::new(css::ROYAL_BLUE, 4.0, 30.0))?;
    surface.add_vector("F3", 250.0, 180, VectorStyle::new(css::SEA_GREEN, 4.0, 30.0))?;
    surface.add_vector("N", 0.0, 0, VectorStyle::default())?;

    let mut redraws = 0_u32;
    let mut host = || redraws += 1;

    // Drag the diagram a little to the right.
    surface.handle_pointer(PointerEvent::down(0, Point::new(400.0, 300.0), 0), &mut host);
    for step in 1..=5_u32 {
        let x = 400.0 + 12.0 * f64::from(step);
        surface.handle_pointer(PointerEvent::moved(0, Point::new(x, 300.0), 16 * u64::from(step)), &mut host);
    }
    surface.handle_pointer(PointerEvent::up(0, Point::new(460.0, 300.0), 100), &mut host);

    // Spread two fingers around the center to zoom in.
    surface.handle_pointer(PointerEvent::down(1, Point::new(350.0, 300.0), 200), &mut host);
    surface.handle_pointer(PointerEvent::down(2, Point::new(450.0, 300.0), 205), &mut host);
    for step in 1..=4_u32 {
        let spread = 50.0 + 10.0 * f64::from(step);
        let t = 205 + 16 * u64::from(step);
        surface.handle_pointer(PointerEvent::moved(1, Point::new(400.0 - spread, 300.0), t), &mut host);
        surface.handle_pointer(PointerEvent::moved(2, Point::new(400.0 + spread, 300.0), t), &mut host);
    }
    surface.handle_pointer(PointerEvent::up(1, Point::new(340.0, 300.0), 300), &mut host);
    surface.handle_pointer(PointerEvent::up(2, Point::new(460.0, 300.0), 300), &mut host);

    tracing::info!(redraws, info = ?surface.view().debug_info(), "gestures replayed");

    let mut canvas = SvgCanvas::new(WIDTH, HEIGHT);
    surface.render(&mut canvas);
    fs::write(&path, canvas.finish())?;
    println!("wrote {path}");
    Ok(())
}
