pub mod io;
pub mod rgb;
pub mod traits;
pub mod u8;

pub use self::rgb::{ImageRgb8, RgbImageU8};
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::GrayImageU8;
