//! Three-channel 8-bit images.
//!
//! Channel order is fixed to **RGB** throughout the crate. Images decoded from
//! disk go through `image::DynamicImage::into_rgb8`, so colour targets in the
//! configuration must be given as `[r, g, b]`.
use image::RgbImage;

/// Borrowed RGB view with stride in pixels.
#[derive(Clone, Copy, Debug)]
pub struct ImageRgb8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub data: &'a [[u8; 3]],
}

impl<'a> ImageRgb8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        self.data[y * self.stride + x]
    }

    /// Image centre in pixel coordinates.
    pub fn center(&self) -> [f32; 2] {
        crate::lines::geometry::image_center(self.w, self.h)
    }
}

impl<'a> crate::image::traits::ImageView for ImageRgb8<'a> {
    type Pixel = [u8; 3];

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
    fn row(&self, y: usize) -> &[[u8; 3]] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

/// Owned RGB buffer (stride == width) with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbImageU8 {
    width: usize,
    height: usize,
    data: Vec<[u8; 3]>,
}

impl RgbImageU8 {
    /// Construct from packed pixels. Returns `None` when the length does not match.
    pub fn new(width: usize, height: usize, data: Vec<[u8; 3]>) -> Option<Self> {
        (data.len() == width * height).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Solid-colour image of the given size.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Self {
        Self {
            width,
            height,
            data: vec![rgb; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        self.data[y * self.width + x] = rgb;
    }

    /// Borrow as a read-only `ImageRgb8` view
    pub fn as_view(&self) -> ImageRgb8<'_> {
        ImageRgb8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }

    pub fn from_rgb_image(img: RgbImage) -> Self {
        let width = img.width() as usize;
        let height = img.height() as usize;
        let data = img
            .into_raw()
            .chunks_exact(3)
            .map(|px| [px[0], px[1], px[2]])
            .collect();
        Self {
            width,
            height,
            data,
        }
    }
}

/// Copy a view into an `image::RgbImage` (used for overlays).
pub fn to_rgb_image(view: &ImageRgb8<'_>) -> RgbImage {
    let mut out = RgbImage::new(view.w as u32, view.h as u32);
    for y in 0..view.h {
        for x in 0..view.w {
            out.put_pixel(x as u32, y as u32, image::Rgb(view.get(x, y)));
        }
    }
    out
}
