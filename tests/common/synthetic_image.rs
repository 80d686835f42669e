use table_detector::image::RgbImageU8;

/// Cloth colour matching the default mask target.
pub const CLOTH_RGB: [u8; 3] = [102, 131, 153];

/// Dark background with an axis-aligned cloth rectangle covering
/// `x0..x1` × `y0..y1` (half-open).
pub fn table_rgb(
    width: usize,
    height: usize,
    (x0, x1): (usize, usize),
    (y0, y1): (usize, usize),
) -> RgbImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(x0 < x1 && x1 <= width, "rectangle must fit horizontally");
    assert!(y0 < y1 && y1 <= height, "rectangle must fit vertically");

    let mut img = RgbImageU8::filled(width, height, [20, 18, 16]);
    for y in y0..y1 {
        for x in x0..x1 {
            img.set(x, y, CLOTH_RGB);
        }
    }
    img
}
