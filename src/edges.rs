//! Binary edge extraction from the foreground mask.

use crate::image::GrayImageU8;
use imageproc::edges::canny;

/// Produces a binary edge map (non-zero = edge) from a mask or gray image.
pub trait EdgeDetector {
    fn detect_edges(&self, image: &GrayImageU8) -> GrayImageU8;
}

/// Canny detector with hysteresis thresholds on the gradient magnitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CannyEdgeDetector {
    pub low_threshold: f32,
    pub high_threshold: f32,
}

impl EdgeDetector for CannyEdgeDetector {
    fn detect_edges(&self, image: &GrayImageU8) -> GrayImageU8 {
        if image.w == 0 || image.h == 0 {
            return GrayImageU8::new(image.w, image.h);
        }
        let edges = canny(
            &image.to_gray_image(),
            self.low_threshold,
            self.high_threshold,
        );
        GrayImageU8::from_gray_image(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> CannyEdgeDetector {
        CannyEdgeDetector {
            low_threshold: 100.0,
            high_threshold: 200.0,
        }
    }

    #[test]
    fn flat_mask_has_no_edges() {
        let mut mask = GrayImageU8::new(32, 32);
        mask.data.iter_mut().for_each(|v| *v = 255);
        assert_eq!(detector().detect_edges(&mask).count_nonzero(), 0);
    }

    #[test]
    fn step_produces_edges_near_the_boundary() {
        let mut mask = GrayImageU8::new(40, 40);
        for y in 0..40 {
            for x in 20..40 {
                mask.set(x, y, 255);
            }
        }
        let edges = detector().detect_edges(&mask);
        assert!(edges.count_nonzero() > 20);
        for [x, _] in edges.nonzero_points() {
            assert!((x - 19.5).abs() <= 2.0, "edge pixel far from the step: x={x}");
        }
    }
}
