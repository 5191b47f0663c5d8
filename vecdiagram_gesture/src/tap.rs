// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap and double-tap recognition from press/release pairs.

use kurbo::Point;

use crate::GestureConfig;

/// Kind of tap recognized on release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapKind {
    /// A single short press without movement.
    Single,
    /// A second tap close in time and space to the previous one.
    Double,
}

/// Remembers the previous tap so a following one can be paired into a
/// double tap.
#[derive(Clone, Copy, Debug, Default)]
pub struct TapRecognizer {
    last_tap: Option<(Point, u64)>,
}

impl TapRecognizer {
    /// Classify a release that never turned into a drag or pinch.
    ///
    /// Returns `None` when the press was held longer than the tap timeout.
    pub fn on_release(
        &mut self,
        down_time_ms: u64,
        up_pos: Point,
        up_time_ms: u64,
        config: &GestureConfig,
    ) -> Option<TapKind> {
        if up_time_ms.saturating_sub(down_time_ms) > config.tap_timeout_ms {
            self.last_tap = None;
            return None;
        }

        if let Some((prev_pos, prev_time)) = self.last_tap {
            let close_in_time =
                down_time_ms.saturating_sub(prev_time) <= config.double_tap_timeout_ms;
            let close_in_space =
                (up_pos - prev_pos).hypot2() <= config.double_tap_slop * config.double_tap_slop;
            if close_in_time && close_in_space {
                self.last_tap = None;
                return Some(TapKind::Double);
            }
        }

        self.last_tap = Some((up_pos, up_time_ms));
        Some(TapKind::Single)
    }

    /// Forget the previous tap.
    pub fn reset(&mut self) {
        self.last_tap = None;
    }
}
