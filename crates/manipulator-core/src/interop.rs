//! Conversion between [`PixelBuffer`] and the `image` crate's `RgbImage`.
//!
//! Lets callers hand a decoded bitmap to the wider `image` ecosystem, or
//! bring any image it can load into the transform engine.

use crate::pixel::{PixelBuffer, Rgb};

impl PixelBuffer {
    /// Create a buffer from an `image::RgbImage`.
    pub fn from_rgb_image(img: &image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        PixelBuffer::from_fn(width as usize, height as usize, |x, y| {
            Rgb::from(img.get_pixel(x as u32, y as u32).0)
        })
    }

    /// Convert to an `image::RgbImage`.
    ///
    /// Returns `None` if a dimension does not fit in `u32`.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        let width = u32::try_from(self.width()).ok()?;
        let height = u32::try_from(self.height()).ok()?;
        image::RgbImage::from_raw(width, height, self.to_rgb_bytes())
    }
}

impl From<&image::RgbImage> for PixelBuffer {
    fn from(img: &image::RgbImage) -> Self {
        PixelBuffer::from_rgb_image(img)
    }
}
