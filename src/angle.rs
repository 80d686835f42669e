//! Angle utilities used by the line normalizer.

use std::f32::consts::TAU;

/// Reduces an angle into the range [0, 2π).
#[inline]
pub fn wrap_full_turn(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly 2π for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
