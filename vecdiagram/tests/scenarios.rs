// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scenarios for the vector store, the camera, and the surface.

use kurbo::{Point, Size, Vec2};
use vecdiagram::{
    AngleConvention, DiagramSurface, GestureOutcome, GestureState, InvalidVectorError,
    OriginClamp, PinchUpdate, PointerEvent, SurfaceConfig, VectorStore, VectorStyle,
    ViewTransform,
};
use vecdiagram_geometry::{degrees_to_radians, endpoint};

#[test]
fn forty_five_degrees_length_hundred() {
    let mut store = VectorStore::new();
    store
        .upsert("A", degrees_to_radians(45.0), 100, VectorStyle::default())
        .unwrap();
    let record = store.get("A").unwrap();
    let tip = endpoint(Point::ORIGIN, record.angle_radians, f64::from(record.length));
    assert!((tip.x - 70.7).abs() <= 0.1);
    assert!((tip.y - 70.7).abs() <= 0.1);
}

#[test]
fn tiny_zoom_factor_is_rejected_without_side_effects() {
    let mut view = ViewTransform::new(Size::new(640.0, 480.0));
    view.set_scale(1.7);
    view.set_origin(Vec2::new(12.0, -30.0));

    assert!(!view.zoom_by(0.005, Point::new(50.0, 50.0)));
    assert_eq!(view.scale(), 1.7);
    assert_eq!(view.origin(), Vec2::new(12.0, -30.0));
}

#[test]
fn upsert_replaces_instead_of_duplicating() {
    let mut store = VectorStore::new();
    store.upsert("A", 0.0, 10, VectorStyle::default()).unwrap();
    store
        .upsert("A", degrees_to_radians(90.0), 20, VectorStyle::default())
        .unwrap();

    let list = store.list();
    assert_eq!(list.len(), 1);
    let only = &list.as_slice()[0];
    assert_eq!(only.label, "A");
    assert!((only.angle_radians - degrees_to_radians(90.0)).abs() < 1e-12);
    assert_eq!(only.length, 20);
}

#[test]
fn removing_a_ghost_is_a_quiet_no_op() {
    let mut store = VectorStore::new();
    assert!(!store.remove("ghost"));
    assert!(store.list().is_empty());
    assert_eq!(store.revision(), 0);
}

#[test]
fn negative_length_is_reported_at_the_surface() {
    let mut surface = DiagramSurface::default();
    let err = surface
        .add_vector("neg", 10.0, -5, VectorStyle::default())
        .unwrap_err();
    assert_eq!(
        err,
        InvalidVectorError::NegativeLength {
            label: "neg".into(),
            length: -5,
        }
    );
    assert!(surface.vectors().is_empty());
}

#[test]
fn surface_add_and_remove_round_trip() {
    let mut surface = DiagramSurface::default();
    surface.add_vector("b", 0.0, 5, VectorStyle::default()).unwrap();
    surface.add_vector("a", 180.0, 5, VectorStyle::default()).unwrap();

    let labels: Vec<_> = surface.vectors().iter().map(|r| r.label.clone()).collect();
    assert_eq!(labels, ["a", "b"]);

    assert!(surface.remove_vector("a"));
    assert!(!surface.remove_vector("a"));
    assert_eq!(surface.store().len(), 1);
}

#[test]
fn drag_moves_content_with_the_finger() {
    let mut surface = DiagramSurface::default();
    surface.on_layout(Size::new(400.0, 300.0));
    let mut redraws = 0;
    let mut host = || redraws += 1;

    let before = surface.view().to_screen(Point::ORIGIN);
    surface.handle_pointer(PointerEvent::down(0, Point::new(100.0, 100.0), 0), &mut host);
    surface.handle_pointer(PointerEvent::moved(0, Point::new(130.0, 80.0), 16), &mut host);
    surface.handle_pointer(PointerEvent::up(0, Point::new(130.0, 80.0), 32), &mut host);
    let after = surface.view().to_screen(Point::ORIGIN);

    assert!((after.x - before.x - 30.0).abs() < 1e-9);
    assert!((after.y - before.y + 20.0).abs() < 1e-9);
    assert_eq!(redraws, 1);
    assert_eq!(surface.gestures().state(), GestureState::Idle);
}

#[test]
fn two_finger_pinch_keeps_the_focal_point_still() {
    let mut surface = DiagramSurface::default();
    surface.on_layout(Size::new(400.0, 300.0));
    let mut redraws = 0;
    let mut host = || redraws += 1;

    surface.handle_pointer(PointerEvent::down(0, Point::new(150.0, 150.0), 0), &mut host);
    surface.handle_pointer(PointerEvent::down(1, Point::new(250.0, 150.0), 5), &mut host);

    // First finger moves out: the midpoint shifts left to x = 187.5.
    surface.handle_pointer(PointerEvent::moved(0, Point::new(125.0, 150.0), 16), &mut host);

    // Second finger follows: the midpoint is back at x = 200.
    let focal = Point::new(200.0, 150.0);
    let under_focal = surface.logical_point_at(focal);
    let out =
        surface.handle_pointer(PointerEvent::moved(1, Point::new(275.0, 150.0), 16), &mut host);

    assert!(matches!(out, GestureOutcome::Zoomed(_)));
    assert!(surface.view().scale() > 0.5);
    let now = surface.view().to_screen(under_focal);
    assert!((now.x - focal.x).abs() < 1e-6);
    assert!((now.y - focal.y).abs() < 1e-6);
    assert_eq!(redraws, 2);
}

#[test]
fn degenerate_external_pinch_is_absorbed() {
    let mut surface = DiagramSurface::default();
    let mut redraws = 0;
    let mut host = || redraws += 1;

    let out = surface.handle_pinch(
        PinchUpdate {
            scale_factor: 0.001,
            focal: Point::new(10.0, 10.0),
        },
        &mut host,
    );

    assert!(matches!(out, GestureOutcome::Rejected(_)));
    assert_eq!(surface.view().scale(), 0.5);
    assert_eq!(redraws, 0);
}

#[test]
fn external_pinch_respects_scale_bounds() {
    let mut surface = DiagramSurface::default();
    surface.set_scale_bounds(0.5, 1.0);
    let mut host = || {};

    for _ in 0..20 {
        surface.handle_pinch(
            PinchUpdate {
                scale_factor: 1.5,
                focal: Point::new(10.0, 10.0),
            },
            &mut host,
        );
    }
    assert_eq!(surface.view().scale(), 1.0);
}

#[test]
fn viewport_clamp_keeps_origin_inside() {
    let config = SurfaceConfig::default().with_origin_clamp(OriginClamp::Viewport);
    let mut surface = DiagramSurface::new(config);
    surface.on_layout(Size::new(200.0, 100.0));
    let mut host = || {};

    surface.handle_pointer(PointerEvent::down(0, Point::new(10.0, 10.0), 0), &mut host);
    surface.handle_pointer(PointerEvent::moved(0, Point::new(5000.0, 5000.0), 16), &mut host);

    let origin = surface.view().origin();
    assert!((0.0..=200.0).contains(&origin.x));
    assert!((0.0..=100.0).contains(&origin.y));
}

#[test]
fn clockwise_convention_is_selectable() {
    let config = SurfaceConfig::default().with_angle_convention(AngleConvention::Clockwise);
    let mut surface = DiagramSurface::new(config);
    surface.add_vector("v", 90.0, 10, VectorStyle::default()).unwrap();
    let frame = &surface.frame_geometry()[0];
    assert!(frame.tip.y > 9.99);
    assert_eq!(frame.label_text, "v: 90°, 10");
}
