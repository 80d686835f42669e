use crate::angle::wrap_full_turn;
use crate::hough::RawLine;
use log::debug;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Infinite line `x·cos(angle) + y·sin(angle) = offset` in center-relative
/// pixel coordinates (origin at the image centre, x right, y down).
///
/// Canonical lines keep `angle` in `[0, π)`; see [`Line::canonical`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub offset: f32,
    pub angle: f32,
}

impl Line {
    /// Builds a line without touching its representation.
    pub const fn new(offset: f32, angle: f32) -> Self {
        Self { offset, angle }
    }

    /// Builds the canonical form: the angle is reduced into `[0, 2π)` and, when
    /// it lands at or past π, π is subtracted and the offset negated. Both
    /// representations describe the same set of points.
    pub fn canonical(offset: f32, angle: f32) -> Self {
        let angle = wrap_full_turn(angle);
        if angle >= PI {
            Self {
                offset: -offset,
                angle: angle - PI,
            }
        } else {
            Self { offset, angle }
        }
    }

    /// Unit normal `(cos, sin)` of the line.
    #[inline]
    pub fn normal(&self) -> [f32; 2] {
        let (s, c) = self.angle.sin_cos();
        [c, s]
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.offset.is_finite() && self.angle.is_finite()
    }
}

/// Re-expresses a detector line relative to `center` and canonicalizes it.
///
/// Detector offsets are measured from the top-left image corner; subtracting
/// the projection of the centre onto the normal yields the signed distance
/// from the centre instead.
pub fn normalize_raw(raw: &RawLine, center: [f32; 2]) -> Line {
    let (s, c) = raw.theta.sin_cos();
    let offset = raw.rho - center[0] * c - center[1] * s;
    Line::canonical(offset, raw.theta)
}

/// Normalizes a detector batch, dropping non-finite candidates.
pub fn normalize_all(raw: &[RawLine], center: [f32; 2]) -> Vec<Line> {
    let lines: Vec<Line> = raw
        .iter()
        .map(|r| normalize_raw(r, center))
        .filter(Line::is_finite)
        .collect();
    if lines.len() != raw.len() {
        debug!(
            "normalize: dropped {} non-finite candidates",
            raw.len() - lines.len()
        );
    }
    lines
}
