//! Conversions between the offset/angle form and two-point forms.
//!
//! Lines live in center-relative coordinates; segments are returned in image
//! pixel coordinates (origin top-left, x right, y down).

use super::line::Line;
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

/// Half-length used when a line only needs two distinct points (distances).
const UNIT_EXTENT: f32 = 1.0;
const EPS: f32 = 1e-6;

/// Two endpoints in image pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub p0: [f32; 2],
    pub p1: [f32; 2],
}

impl Segment {
    pub fn length(&self) -> f32 {
        let dx = self.p1[0] - self.p0[0];
        let dy = self.p1[1] - self.p0[1];
        (dx * dx + dy * dy).sqrt()
    }
}

/// Reference point used for center-relative offsets.
#[inline]
pub fn image_center(width: usize, height: usize) -> [f32; 2] {
    [width as f32 * 0.5, height as f32 * 0.5]
}

/// Two points on `line`, `extent` away on either side of the foot of the
/// perpendicular from the origin.
pub fn far_points(line: &Line, extent: f32) -> ([f32; 2], [f32; 2]) {
    if line.angle == 0.0 {
        // x = offset
        return ([line.offset, -extent], [line.offset, extent]);
    }
    let (s, c) = line.angle.sin_cos();
    let foot = [c * line.offset, s * line.offset];
    let dir = [-s, c];
    (
        [foot[0] - extent * dir[0], foot[1] - extent * dir[1]],
        [foot[0] + extent * dir[0], foot[1] + extent * dir[1]],
    )
}

/// Perpendicular distance from `p` to the line through `a` and `b`:
/// `|det(b − a, p − a)| / |b − a|`.
///
/// Coincident `a` and `b` do not define a line; the distance is then
/// reported as `f32::MAX` so callers ranking by distance skip it.
pub fn point_line_distance(a: [f32; 2], b: [f32; 2], p: [f32; 2]) -> f32 {
    let a = Vector2::new(a[0], a[1]);
    let ab = Vector2::new(b[0], b[1]) - a;
    let ap = Vector2::new(p[0], p[1]) - a;
    let len = ab.norm();
    if !(len > EPS) {
        return f32::MAX;
    }
    let det = Matrix2::from_columns(&[ab, ap]).determinant();
    det.abs() / len
}

/// Distance from `p` (center-relative) to `line`.
pub fn distance_to_point(line: &Line, p: [f32; 2]) -> f32 {
    let (a, b) = far_points(line, UNIT_EXTENT);
    point_line_distance(a, b, p)
}

fn to_image(p: [f32; 2], center: [f32; 2]) -> [f32; 2] {
    [p[0] + center[0], p[1] + center[1]]
}

/// Endpoints of `line` clipped to the pixel grid `[0, w−1] × [0, h−1]`.
/// Returns `None` when the line misses the image.
pub fn line_to_endpoints(line: &Line, width: usize, height: usize) -> Option<Segment> {
    if width == 0 || height == 0 || !line.is_finite() {
        return None;
    }
    let center = image_center(width, height);
    let x_max = (width - 1) as f32;
    let y_max = (height - 1) as f32;

    if line.angle == 0.0 {
        let x = line.offset + center[0];
        if !(0.0..=x_max).contains(&x) {
            return None;
        }
        return Some(Segment {
            p0: [x, 0.0],
            p1: [x, y_max],
        });
    }

    let diag = (x_max * x_max + y_max * y_max).sqrt().max(1.0);
    let (a, b) = far_points(line, diag);
    let p = to_image(a, center);
    let q = to_image(b, center);
    let d = [q[0] - p[0], q[1] - p[1]];

    // Liang-Barsky over t ∈ [0, 1].
    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;
    for (pos, delta, hi) in [(p[0], d[0], x_max), (p[1], d[1], y_max)] {
        if delta.abs() <= EPS {
            if pos < 0.0 || pos > hi {
                return None;
            }
            continue;
        }
        let ta = (0.0 - pos) / delta;
        let tb = (hi - pos) / delta;
        t0 = t0.max(ta.min(tb));
        t1 = t1.min(ta.max(tb));
    }
    if t0 > t1 {
        return None;
    }
    let at = |t: f32| {
        [
            (p[0] + t * d[0]).clamp(0.0, x_max),
            (p[1] + t * d[1]).clamp(0.0, y_max),
        ]
    };
    Some(Segment {
        p0: at(t0),
        p1: at(t1),
    })
}
