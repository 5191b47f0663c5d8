// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::PI;

/// Converts degrees to radians.
#[inline]
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Converts radians to degrees.
#[inline]
#[must_use]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Wraps an angle in degrees into `[0, 360)`.
///
/// Negative angles wrap around (`-90` becomes `270`). Non-finite input maps
/// to `0`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let r = degrees % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // `-1e-20 % 360 + 360` rounds to exactly 360.
    if r >= 360.0 { 0.0 } else { r }
}
