//! Owned single-channel 8-bit buffer used for binary masks and edge maps.
//!
//! Foreground pixels are stored as 255 and background as 0; consumers treat
//! any non-zero value as set.
use image::GrayImage;

#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Bytes between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0; w * h],
        }
    }

    /// Wrap raw row-major bytes. Returns `None` when the length does not match.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Option<Self> {
        (data.len() == w * h).then_some(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.data[y * self.stride + x] = v;
    }

    #[inline]
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.get(x, y) != 0
    }

    /// Number of non-zero pixels.
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Coordinates of every non-zero pixel, row by row.
    pub fn nonzero_points(&self) -> Vec<[f32; 2]> {
        let mut points = Vec::new();
        for y in 0..self.h {
            let row = &self.data[y * self.stride..y * self.stride + self.w];
            for (x, &v) in row.iter().enumerate() {
                if v != 0 {
                    points.push([x as f32, y as f32]);
                }
            }
        }
        points
    }

    /// Copy into an `image::GrayImage` for use with `imageproc` operators.
    pub fn to_gray_image(&self) -> GrayImage {
        let mut out = GrayImage::new(self.w as u32, self.h as u32);
        for y in 0..self.h {
            for x in 0..self.w {
                out.put_pixel(x as u32, y as u32, image::Luma([self.get(x, y)]));
            }
        }
        out
    }

    pub fn from_gray_image(img: GrayImage) -> Self {
        let w = img.width() as usize;
        let h = img.height() as usize;
        Self {
            w,
            h,
            stride: w,
            data: img.into_raw(),
        }
    }
}

impl crate::image::traits::ImageView for GrayImageU8 {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for GrayImageU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_image_round_trips_through_image_crate() {
        let mut buf = GrayImageU8::new(4, 3);
        buf.set(1, 2, 255);
        buf.set(3, 0, 7);
        let back = GrayImageU8::from_gray_image(buf.to_gray_image());
        assert_eq!(back.w, 4);
        assert_eq!(back.h, 3);
        assert_eq!(back.get(1, 2), 255);
        assert_eq!(back.get(3, 0), 7);
        assert_eq!(back.count_nonzero(), 2);
    }

    #[test]
    fn nonzero_points_are_reported_in_row_order() {
        let mut buf = GrayImageU8::new(3, 2);
        buf.set(2, 0, 255);
        buf.set(0, 1, 255);
        assert_eq!(buf.nonzero_points(), vec![[2.0, 0.0], [0.0, 1.0]]);
    }

    #[test]
    fn from_raw_rejects_length_mismatch() {
        assert!(GrayImageU8::from_raw(2, 2, vec![0; 3]).is_none());
        assert!(GrayImageU8::from_raw(2, 2, vec![0; 4]).is_some());
    }
}
