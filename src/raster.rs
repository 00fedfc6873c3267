//! In-memory raster buffer passed between pipeline stages
//!
//! A `RasterImage` is owned by exactly one stage at a time. Stages take it
//! by value and hand back a new one, so a superseded buffer is dropped as
//! soon as the next stage has produced its result.

use std::fmt;

use image::{ColorType, DynamicImage};

/// Decoded image with its pixel buffer
#[derive(Debug, Clone)]
pub struct RasterImage {
    image: DynamicImage,
}

impl RasterImage {
    /// Wrap a decoded image
    pub fn new(image: DynamicImage) -> Self {
        RasterImage { image }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// (width, height) in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Color layout of the pixel buffer
    pub fn color_type(&self) -> ColorType {
        self.image.color()
    }

    /// Number of channels per pixel
    pub fn channels(&self) -> u8 {
        self.color_type().channel_count()
    }

    /// Bits per channel
    pub fn bit_depth(&self) -> u16 {
        let color = self.color_type();
        color.bits_per_pixel() / color.channel_count() as u16
    }

    /// Whether width equals height
    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }

    /// Borrow the underlying image
    pub fn as_image(&self) -> &DynamicImage {
        &self.image
    }

    /// Give up the wrapper and return the underlying image
    pub fn into_image(self) -> DynamicImage {
        self.image
    }
}

impl From<DynamicImage> for RasterImage {
    fn from(image: DynamicImage) -> Self {
        RasterImage::new(image)
    }
}

impl fmt::Display for RasterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}, {} channel(s), {} bit",
            self.width(),
            self.height(),
            self.channels(),
            self.bit_depth()
        )
    }
}
