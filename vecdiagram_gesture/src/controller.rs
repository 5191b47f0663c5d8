// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture state machine that turns pointer streams into camera updates.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;
use vecdiagram_view2d::ViewTransform;

use crate::drag::DragTracker;
use crate::pinch::{PinchSample, PinchTracker, PinchUpdate};
use crate::tap::{TapKind, TapRecognizer};
use crate::{DegenerateGesture, GestureConfig, RedrawHost};

/// Host-assigned pointer identity (finger, pen, or mouse).
pub type PointerId = u64;

/// Phase of a raw pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// The pointer became active.
    Down,
    /// An active pointer moved.
    Move,
    /// The pointer was released.
    Up,
    /// The host aborted the whole sequence.
    Cancel,
}

/// A raw pointer event in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer identity.
    pub id: PointerId,
    /// Event phase.
    pub phase: PointerPhase,
    /// Position in screen coordinates.
    pub position: Point,
    /// Host timestamp in milliseconds.
    pub time_ms: u64,
}

impl PointerEvent {
    /// Creates a pointer-down event.
    #[must_use]
    pub fn down(id: PointerId, position: Point, time_ms: u64) -> Self {
        Self {
            id,
            phase: PointerPhase::Down,
            position,
            time_ms,
        }
    }

    /// Creates a pointer-move event.
    #[must_use]
    pub fn moved(id: PointerId, position: Point, time_ms: u64) -> Self {
        Self {
            id,
            phase: PointerPhase::Move,
            position,
            time_ms,
        }
    }

    /// Creates a pointer-up event.
    #[must_use]
    pub fn up(id: PointerId, position: Point, time_ms: u64) -> Self {
        Self {
            id,
            phase: PointerPhase::Up,
            position,
            time_ms,
        }
    }

    /// Creates a cancel event.
    #[must_use]
    pub fn cancel(time_ms: u64) -> Self {
        Self {
            id: 0,
            phase: PointerPhase::Cancel,
            position: Point::ZERO,
            time_ms,
        }
    }
}

/// Named states of the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No gesture in progress, or a press that has not moved past the slop.
    #[default]
    Idle,
    /// One pointer is panning the view.
    Dragging,
    /// Two or more pointers are zooming the view.
    Pinching,
}

/// What a single input did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    /// Consumed without any camera change.
    Ignored,
    /// The view was panned by this scroll distance.
    Panned(Vec2),
    /// The view was zoomed.
    Zoomed(PinchUpdate),
    /// A degenerate pinch step was dropped.
    Rejected(DegenerateGesture),
    /// A single tap was recognized; it has no camera effect.
    Tap(Point),
    /// A double tap was recognized; it has no camera effect.
    DoubleTap(Point),
}

impl GestureOutcome {
    /// Returns `true` if the camera changed and a redraw was requested.
    #[must_use]
    pub fn is_camera_change(&self) -> bool {
        matches!(self, Self::Panned(_) | Self::Zoomed(_))
    }
}

#[derive(Clone, Copy, Debug)]
struct TrackedPointer {
    id: PointerId,
    position: Point,
    down_time_ms: u64,
}

/// Interprets pointer streams and drives a [`ViewTransform`].
///
/// Transitions:
/// - `Idle → Dragging` when the only active pointer moves past the touch slop.
/// - `Idle/Dragging → Pinching` when a second pointer goes down.
/// - `Pinching → Dragging` when a pointer is released and one remains; the
///   drag reference is rebased so the view does not jump.
/// - any state `→ Idle` when the last pointer is released or on cancel.
///
/// Every accepted camera update is followed by one
/// [`RedrawHost::request_redraw`] call. The controller never draws.
#[derive(Clone, Debug, Default)]
pub struct GestureController {
    config: GestureConfig,
    state: GestureState,
    pointers: SmallVec<[TrackedPointer; 2]>,
    drag: DragTracker,
    pinch: PinchTracker,
    taps: TapRecognizer,
    tap_candidate: bool,
}

impl GestureController {
    /// Creates a controller with the given tuning.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Returns the tuning in use.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Replaces the tuning. Takes effect with the next event.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// Number of pointers currently down.
    #[must_use]
    pub fn active_pointers(&self) -> usize {
        self.pointers.len()
    }

    /// Feeds one raw pointer event.
    pub fn handle_pointer<H: RedrawHost + ?Sized>(
        &mut self,
        event: PointerEvent,
        view: &mut ViewTransform,
        host: &mut H,
    ) -> GestureOutcome {
        // A release must always free its pointer; its position is only a hint.
        let needs_position = matches!(event.phase, PointerPhase::Down | PointerPhase::Move);
        if needs_position && !event.position.is_finite() {
            tracing::debug!(id = event.id, "dropping pointer event with non-finite position");
            return GestureOutcome::Ignored;
        }
        match event.phase {
            PointerPhase::Down => self.on_down(event),
            PointerPhase::Move => self.on_move(event, view, host),
            PointerPhase::Up => self.on_up(event),
            PointerPhase::Cancel => {
                self.reset();
                GestureOutcome::Ignored
            }
        }
    }

    /// Feeds one step from an external pinch recognizer.
    ///
    /// Steps with a scale factor below
    /// [`GestureConfig::min_scale_factor`] are dropped and reported as
    /// [`GestureOutcome::Rejected`]; the host is not notified.
    pub fn handle_pinch<H: RedrawHost + ?Sized>(
        &mut self,
        update: PinchUpdate,
        view: &mut ViewTransform,
        host: &mut H,
    ) -> GestureOutcome {
        self.apply_zoom(update, view, host)
    }

    /// Abandons the current sequence and returns to `Idle`.
    pub fn reset(&mut self) {
        self.pointers.clear();
        self.drag.end();
        self.pinch.end();
        self.tap_candidate = false;
        self.set_state(GestureState::Idle);
    }

    fn on_down(&mut self, event: PointerEvent) -> GestureOutcome {
        if let Some(p) = self.pointers.iter_mut().find(|p| p.id == event.id) {
            // Duplicate down without an up; treat as a position refresh.
            p.position = event.position;
        } else {
            self.pointers.push(TrackedPointer {
                id: event.id,
                position: event.position,
                down_time_ms: event.time_ms,
            });
        }

        match self.pointers.len() {
            1 => {
                self.drag.start(event.position);
                self.tap_candidate = true;
            }
            _ => {
                self.tap_candidate = false;
                self.drag.end();
                if let Some(sample) = self.pinch_sample() {
                    self.pinch.start(sample);
                }
                self.set_state(GestureState::Pinching);
            }
        }
        GestureOutcome::Ignored
    }

    fn on_move<H: RedrawHost + ?Sized>(
        &mut self,
        event: PointerEvent,
        view: &mut ViewTransform,
        host: &mut H,
    ) -> GestureOutcome {
        let Some(index) = self.pointers.iter().position(|p| p.id == event.id) else {
            // Hover or a pointer we never saw go down.
            return GestureOutcome::Ignored;
        };
        self.pointers[index].position = event.position;

        match self.state {
            GestureState::Idle => {
                if self.pointers.len() != 1
                    || !self.drag.exceeds_slop(event.position, self.config.touch_slop)
                {
                    return GestureOutcome::Ignored;
                }
                self.tap_candidate = false;
                self.set_state(GestureState::Dragging);
                self.apply_drag(event.position, view, host)
            }
            GestureState::Dragging => self.apply_drag(event.position, view, host),
            GestureState::Pinching => {
                // Only the first two pointers define the pinch.
                if !self.config.pointer_pinch || index >= 2 {
                    return GestureOutcome::Ignored;
                }
                let Some(sample) = self.pinch_sample() else {
                    return GestureOutcome::Ignored;
                };
                match self.pinch.update(sample) {
                    Some(update) => self.apply_zoom(update, view, host),
                    None => GestureOutcome::Ignored,
                }
            }
        }
    }

    fn on_up(&mut self, event: PointerEvent) -> GestureOutcome {
        let Some(index) = self.pointers.iter().position(|p| p.id == event.id) else {
            return GestureOutcome::Ignored;
        };
        let released = self.pointers.remove(index);
        let up_pos = if event.position.is_finite() {
            event.position
        } else {
            released.position
        };

        match self.pointers.len() {
            0 => {
                let was_tap = self.tap_candidate && self.state == GestureState::Idle;
                self.reset();
                if !was_tap {
                    return GestureOutcome::Ignored;
                }
                match self.taps.on_release(
                    released.down_time_ms,
                    up_pos,
                    event.time_ms,
                    &self.config,
                ) {
                    Some(TapKind::Single) => {
                        tracing::debug!(x = up_pos.x, y = up_pos.y, "tap");
                        GestureOutcome::Tap(up_pos)
                    }
                    Some(TapKind::Double) => {
                        tracing::debug!(x = up_pos.x, y = up_pos.y, "double tap");
                        GestureOutcome::DoubleTap(up_pos)
                    }
                    None => GestureOutcome::Ignored,
                }
            }
            1 => {
                // Measure the next drag delta from where the remaining pointer is now.
                self.pinch.end();
                self.drag.end();
                self.drag.rebase(self.pointers[0].position);
                self.set_state(GestureState::Dragging);
                GestureOutcome::Ignored
            }
            _ => {
                if let Some(sample) = self.pinch_sample() {
                    self.pinch.start(sample);
                }
                GestureOutcome::Ignored
            }
        }
    }

    fn apply_drag<H: RedrawHost + ?Sized>(
        &mut self,
        position: Point,
        view: &mut ViewTransform,
        host: &mut H,
    ) -> GestureOutcome {
        let Some(movement) = self.drag.update(position) else {
            return GestureOutcome::Ignored;
        };
        if movement == Vec2::ZERO {
            return GestureOutcome::Ignored;
        }
        // Scroll distance is previous minus current.
        let distance = -movement;
        view.pan(distance);
        host.request_redraw();
        GestureOutcome::Panned(distance)
    }

    fn apply_zoom<H: RedrawHost + ?Sized>(
        &mut self,
        update: PinchUpdate,
        view: &mut ViewTransform,
        host: &mut H,
    ) -> GestureOutcome {
        let degenerate = !update.scale_factor.is_finite()
            || update.scale_factor < self.config.min_scale_factor;
        if degenerate || !view.zoom_by(update.scale_factor, update.focal) {
            tracing::debug!(
                scale_factor = update.scale_factor,
                "dropping degenerate pinch update"
            );
            return GestureOutcome::Rejected(DegenerateGesture {
                scale_factor: update.scale_factor,
            });
        }
        host.request_redraw();
        GestureOutcome::Zoomed(update)
    }

    fn pinch_sample(&self) -> Option<PinchSample> {
        match self.pointers.as_slice() {
            [a, b, ..] => Some(PinchSample::from_pointers(a.position, b.position)),
            _ => None,
        }
    }

    fn set_state(&mut self, state: GestureState) {
        if self.state != state {
            tracing::debug!(from = ?self.state, to = ?state, "gesture state changed");
            self.state = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};
    use vecdiagram_view2d::ViewTransform;

    use super::*;

    #[derive(Default)]
    struct Counter(u32);

    impl RedrawHost for Counter {
        fn request_redraw(&mut self) {
            self.0 += 1;
        }
    }

    fn view() -> ViewTransform {
        ViewTransform::new(Size::new(800.0, 600.0))
    }

    #[test]
    fn small_press_is_a_tap_without_camera_change() {
        let mut gc = GestureController::default();
        let mut vt = view();
        let mut host = Counter::default();

        gc.handle_pointer(PointerEvent::down(1, Point::new(10.0, 10.0), 0), &mut vt, &mut host);
        let wiggle =
            gc.handle_pointer(PointerEvent::moved(1, Point::new(12.0, 11.0), 20), &mut vt, &mut host);
        assert_eq!(wiggle, GestureOutcome::Ignored);
        let up = gc.handle_pointer(PointerEvent::up(1, Point::new(12.0, 11.0), 60), &mut vt, &mut host);

        assert_eq!(up, GestureOutcome::Tap(Point::new(12.0, 11.0)));
        assert_eq!(vt.origin(), Vec2::ZERO);
        assert_eq!(host.0, 0);
        assert_eq!(gc.state(), GestureState::Idle);
    }

    #[test]
    fn double_tap_is_inert() {
        let mut gc = GestureController::default();
        let mut vt = view();
        let mut host = Counter::default();
        let p = Point::new(100.0, 100.0);

        gc.handle_pointer(PointerEvent::down(1, p, 0), &mut vt, &mut host);
        gc.handle_pointer(PointerEvent::up(1, p, 50), &mut vt, &mut host);
        gc.handle_pointer(PointerEvent::down(1, p, 150), &mut vt, &mut host);
        let out = gc.handle_pointer(PointerEvent::up(1, p, 200), &mut vt, &mut host);

        assert_eq!(out, GestureOutcome::DoubleTap(p));
        assert_eq!(vt.scale(), 1.0);
        assert_eq!(vt.origin(), Vec2::ZERO);
        assert_eq!(host.0, 0);
    }

    #[test]
    fn drag_pans_and_requests_redraw() {
        let mut gc = GestureController::default();
        let mut vt = view();
        vt.set_scale(2.0);
        let mut host = Counter::default();

        gc.handle_pointer(PointerEvent::down(7, Point::new(100.0, 100.0), 0), &mut vt, &mut host);
        let first =
            gc.handle_pointer(PointerEvent::moved(7, Point::new(120.0, 100.0), 16), &mut vt, &mut host);
        assert_eq!(first, GestureOutcome::Panned(Vec2::new(-20.0, 0.0)));
        assert_eq!(gc.state(), GestureState::Dragging);

        let second =
            gc.handle_pointer(PointerEvent::moved(7, Point::new(130.0, 90.0), 32), &mut vt, &mut host);
        assert_eq!(second, GestureOutcome::Panned(Vec2::new(-10.0, 10.0)));

        // origin -= distance / scale for each step.
        assert!((vt.origin().x - 15.0).abs() < 1e-12);
        assert!((vt.origin().y - -5.0).abs() < 1e-12);
        assert_eq!(host.0, 2);

        let up = gc.handle_pointer(PointerEvent::up(7, Point::new(130.0, 90.0), 48), &mut vt, &mut host);
        assert_eq!(up, GestureOutcome::Ignored);
        assert_eq!(gc.state(), GestureState::Idle);
    }

    #[test]
    fn second_pointer_starts_pinch_and_keeps_focal_point() {
        let mut gc = GestureController::default();
        let mut vt = view();
        let mut host = Counter::default();

        gc.handle_pointer(PointerEvent::down(1, Point::new(100.0, 200.0), 0), &mut vt, &mut host);
        gc.handle_pointer(PointerEvent::down(2, Point::new(300.0, 200.0), 5), &mut vt, &mut host);
        assert_eq!(gc.state(), GestureState::Pinching);

        let focal = Point::new(250.0, 200.0);
        let logical_under_focal = vt.to_logical(focal);

        // Move pointer 1 inward: span 200 -> 100.
        let out = gc.handle_pointer(
            PointerEvent::moved(1, Point::new(200.0, 200.0), 16),
            &mut vt,
            &mut host,
        );
        match out {
            GestureOutcome::Zoomed(update) => {
                assert!((update.scale_factor - 0.5).abs() < 1e-12);
                assert_eq!(update.focal, focal);
            }
            other => panic!("expected zoom, got {other:?}"),
        }
        assert!((vt.scale() - 0.5).abs() < 1e-12);
        let back = vt.to_screen(logical_under_focal);
        assert!((back.x - focal.x).abs() < 1e-9 && (back.y - focal.y).abs() < 1e-9);
        assert_eq!(host.0, 1);
    }

    #[test]
    fn releasing_one_pinch_pointer_rebases_drag() {
        let mut gc = GestureController::default();
        let mut vt = view();
        let mut host = Counter::default();

        gc.handle_pointer(PointerEvent::down(1, Point::new(100.0, 100.0), 0), &mut vt, &mut host);
        gc.handle_pointer(PointerEvent::down(2, Point::new(200.0, 100.0), 5), &mut vt, &mut host);
        gc.handle_pointer(PointerEvent::moved(2, Point::new(400.0, 100.0), 10), &mut vt, &mut host);
        gc.handle_pointer(PointerEvent::up(1, Point::new(100.0, 100.0), 20), &mut vt, &mut host);
        assert_eq!(gc.state(), GestureState::Dragging);

        let origin_before = vt.origin();
        let out =
            gc.handle_pointer(PointerEvent::moved(2, Point::new(403.0, 100.0), 30), &mut vt, &mut host);
        // Only the 3 px since the release count, not the distance to pointer 1.
        assert_eq!(out, GestureOutcome::Panned(Vec2::new(-3.0, 0.0)));
        let moved = vt.origin() - origin_before;
        assert!((moved.x - 3.0 / vt.scale()).abs() < 1e-9);
    }

    #[test]
    fn degenerate_pinch_is_rejected_silently() {
        let mut gc = GestureController::default();
        let mut vt = view();
        vt.set_origin(Vec2::new(5.0, 6.0));
        let mut host = Counter::default();

        let out = gc.handle_pinch(
            PinchUpdate {
                scale_factor: 0.005,
                focal: Point::new(50.0, 50.0),
            },
            &mut vt,
            &mut host,
        );
        assert_eq!(
            out,
            GestureOutcome::Rejected(DegenerateGesture {
                scale_factor: 0.005
            })
        );
        assert_eq!(vt.scale(), 1.0);
        assert_eq!(vt.origin(), Vec2::new(5.0, 6.0));
        assert_eq!(host.0, 0);
    }

    #[test]
    fn external_pinch_zooms() {
        let mut gc = GestureController::default();
        let mut vt = view();
        let mut host = Counter::default();

        let out = gc.handle_pinch(
            PinchUpdate {
                scale_factor: 1.5,
                focal: Point::new(400.0, 300.0),
            },
            &mut vt,
            &mut host,
        );
        assert!(out.is_camera_change());
        assert!((vt.scale() - 1.5).abs() < 1e-12);
        assert_eq!(host.0, 1);
    }

    #[test]
    fn pointer_pinch_can_be_disabled() {
        let mut gc = GestureController::new(GestureConfig {
            pointer_pinch: false,
            ..GestureConfig::default()
        });
        let mut vt = view();
        let mut host = Counter::default();

        gc.handle_pointer(PointerEvent::down(1, Point::new(0.0, 0.0), 0), &mut vt, &mut host);
        gc.handle_pointer(PointerEvent::down(2, Point::new(100.0, 0.0), 0), &mut vt, &mut host);
        let out =
            gc.handle_pointer(PointerEvent::moved(2, Point::new(300.0, 0.0), 10), &mut vt, &mut host);
        assert_eq!(out, GestureOutcome::Ignored);
        assert_eq!(vt.scale(), 1.0);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut gc = GestureController::default();
        let mut vt = view();
        let mut host = Counter::default();

        gc.handle_pointer(PointerEvent::down(1, Point::new(0.0, 0.0), 0), &mut vt, &mut host);
        gc.handle_pointer(PointerEvent::down(2, Point::new(10.0, 0.0), 0), &mut vt, &mut host);
        gc.handle_pointer(PointerEvent::cancel(5), &mut vt, &mut host);

        assert_eq!(gc.state(), GestureState::Idle);
        assert_eq!(gc.active_pointers(), 0);
    }

    #[test]
    fn unknown_pointer_moves_are_ignored() {
        let mut gc = GestureController::default();
        let mut vt = view();
        let mut host = Counter::default();

        let out =
            gc.handle_pointer(PointerEvent::moved(9, Point::new(50.0, 50.0), 0), &mut vt, &mut host);
        assert_eq!(out, GestureOutcome::Ignored);
        let out = gc.handle_pointer(PointerEvent::up(9, Point::new(50.0, 50.0), 1), &mut vt, &mut host);
        assert_eq!(out, GestureOutcome::Ignored);
        assert_eq!(host.0, 0);
    }

    #[test]
    fn release_with_non_finite_position_still_frees_the_pointer() {
        let mut gc = GestureController::default();
        let mut vt = view();
        let mut host = Counter::default();

        gc.handle_pointer(PointerEvent::down(1, Point::new(10.0, 10.0), 0), &mut vt, &mut host);
        let up = gc.handle_pointer(
            PointerEvent::up(1, Point::new(f64::NAN, 10.0), 40),
            &mut vt,
            &mut host,
        );
        // Classified at the last known position.
        assert_eq!(up, GestureOutcome::Tap(Point::new(10.0, 10.0)));
        assert_eq!(gc.active_pointers(), 0);
        assert_eq!(gc.state(), GestureState::Idle);

        // The next single finger drags instead of pinching against a stale pointer.
        gc.handle_pointer(PointerEvent::down(2, Point::new(100.0, 100.0), 1_000), &mut vt, &mut host);
        let out = gc.handle_pointer(
            PointerEvent::moved(2, Point::new(160.0, 100.0), 1_016),
            &mut vt,
            &mut host,
        );
        assert_eq!(out, GestureOutcome::Panned(Vec2::new(-60.0, 0.0)));
        assert_eq!(gc.state(), GestureState::Dragging);
        assert_eq!(vt.scale(), 1.0);
    }

    #[test]
    fn releasing_both_pinch_pointers_returns_to_idle_without_a_tap() {
        let mut gc = GestureController::default();
        let mut vt = view();
        let mut host = Counter::default();

        gc.handle_pointer(PointerEvent::down(1, Point::new(100.0, 100.0), 0), &mut vt, &mut host);
        gc.handle_pointer(PointerEvent::down(2, Point::new(200.0, 100.0), 5), &mut vt, &mut host);
        let zoom =
            gc.handle_pointer(PointerEvent::moved(2, Point::new(300.0, 100.0), 20), &mut vt, &mut host);
        assert!(zoom.is_camera_change());

        let first = gc.handle_pointer(PointerEvent::up(2, Point::new(300.0, 100.0), 40), &mut vt, &mut host);
        assert_eq!(first, GestureOutcome::Ignored);
        let last = gc.handle_pointer(PointerEvent::up(1, Point::new(100.0, 100.0), 50), &mut vt, &mut host);

        assert_eq!(last, GestureOutcome::Ignored);
        assert_eq!(gc.state(), GestureState::Idle);
        assert_eq!(gc.active_pointers(), 0);
        assert_eq!(host.0, 1);
    }

    #[test]
    fn extra_pointers_do_not_drive_the_pinch() {
        let mut gc = GestureController::default();
        let mut vt = view();
        let mut host = Counter::default();

        gc.handle_pointer(PointerEvent::down(1, Point::new(100.0, 100.0), 0), &mut vt, &mut host);
        gc.handle_pointer(PointerEvent::down(2, Point::new(200.0, 100.0), 0), &mut vt, &mut host);
        gc.handle_pointer(PointerEvent::down(3, Point::new(150.0, 300.0), 0), &mut vt, &mut host);
        assert_eq!(gc.active_pointers(), 3);

        let out =
            gc.handle_pointer(PointerEvent::moved(3, Point::new(180.0, 320.0), 16), &mut vt, &mut host);
        assert_eq!(out, GestureOutcome::Ignored);
        assert_eq!(vt.scale(), 1.0);
        assert_eq!(host.0, 0);
    }
}
