//! Foreground masking by colour distance.
//!
//! The table cloth is assumed to be close to a single known colour. A pixel
//! belongs to the foreground when its squared RGB distance to that colour is
//! below `threshold²`. An optional 3×3 box blur runs first to suppress sensor
//! noise and thin specular highlights.

use crate::image::{GrayImageU8, ImageRgb8, ImageView, ImageViewMut};

/// Value written for foreground pixels.
pub const FOREGROUND: u8 = 255;

/// Produces a binary foreground mask from an RGB image.
pub trait ForegroundMask {
    fn mask(&self, image: &ImageRgb8<'_>) -> GrayImageU8;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorDistanceMask {
    /// Target colour as `[r, g, b]`.
    pub target_rgb: [u8; 3],
    /// Euclidean RGB distance below which a pixel is foreground.
    pub threshold: f32,
    /// Apply a 3×3 box blur before thresholding.
    pub blur: bool,
}

impl ColorDistanceMask {
    #[inline]
    fn is_foreground(&self, rgb: [f32; 3]) -> bool {
        let t = self.target_rgb;
        let dr = rgb[0] - t[0] as f32;
        let dg = rgb[1] - t[1] as f32;
        let db = rgb[2] - t[2] as f32;
        dr * dr + dg * dg + db * db < self.threshold * self.threshold
    }
}

impl ForegroundMask for ColorDistanceMask {
    fn mask(&self, image: &ImageRgb8<'_>) -> GrayImageU8 {
        let mut out = GrayImageU8::new(image.w, image.h);
        if self.blur {
            let blurred = box_blur_3x3(image);
            for y in 0..image.h {
                let src = &blurred[y * image.w..(y + 1) * image.w];
                for (dst, &px) in out.row_mut(y).iter_mut().zip(src) {
                    if self.is_foreground(px) {
                        *dst = FOREGROUND;
                    }
                }
            }
        } else {
            for (y, row) in image.rows().enumerate() {
                for (dst, px) in out.row_mut(y).iter_mut().zip(row) {
                    if self.is_foreground([px[0] as f32, px[1] as f32, px[2] as f32]) {
                        *dst = FOREGROUND;
                    }
                }
            }
        }
        out
    }
}

/// Mean over the 3×3 neighbourhood with clamp-to-edge borders.
fn box_blur_3x3(image: &ImageRgb8<'_>) -> Vec<[f32; 3]> {
    let (w, h) = (image.w, image.h);
    let mut out = vec![[0.0f32; 3]; w * h];
    if w == 0 || h == 0 {
        return out;
    }
    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];
            let mut acc = [0.0f32; 3];
            for &yy in &y_idx {
                for &xx in &x_idx {
                    let px = image.get(xx, yy);
                    acc[0] += px[0] as f32;
                    acc[1] += px[1] as f32;
                    acc[2] += px[2] as f32;
                }
            }
            out[y * w + x] = [acc[0] / 9.0, acc[1] / 9.0, acc[2] / 9.0];
        }
    }
    out
}
