//! Ball detection seam.
//!
//! Circles are collected for diagnostics and overlays only; they never feed
//! back into the boundary decision.

use crate::image::{GrayImageU8, ImageRgb8};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Circle {
    /// Centre in image pixel coordinates.
    pub center: [f32; 2],
    pub radius: f32,
}

/// Finds circular blobs (balls) given the image and the table mask.
pub trait CircleDetector {
    fn detect_circles(&self, image: &ImageRgb8<'_>, mask: &GrayImageU8) -> Vec<Circle>;
}
