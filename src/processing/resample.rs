//! Resizing to the requested output resolution

use image::imageops::FilterType;
use log::{debug, info};

use crate::errors::{CropError, CropResult};
use crate::raster::RasterImage;

/// Largest accepted output side in pixels
pub const MAX_DIMENSION: i64 = 32_768;

/// Check requested output dimensions and convert them to pixel sizes
///
/// Both sides must be positive and no larger than `MAX_DIMENSION`.
pub fn validate_dimensions(width: i64, height: i64) -> CropResult<(u32, u32)> {
    let valid = |side: i64| side > 0 && side <= MAX_DIMENSION;
    if !valid(width) || !valid(height) {
        return Err(CropError::InvalidDimensions { width, height });
    }
    Ok((width as u32, height as u32))
}

/// Resize `image` to exactly `width` x `height` with linear interpolation
///
/// # Arguments
/// * `image` - Source raster, consumed
/// * `width` - Requested output width
/// * `height` - Requested output height
///
/// # Returns
/// A new raster of the requested size, or an error if the dimensions are invalid
pub fn resize(image: RasterImage, width: i64, height: i64) -> CropResult<RasterImage> {
    let (width, height) = validate_dimensions(width, height)?;
    info!("Resizing image to {}x{}", width, height);

    if image.dimensions() == (width, height) {
        debug!("Image already has the requested size");
        return Ok(image);
    }

    if image.width() == 0 || image.height() == 0 {
        return Err(CropError::Processing(format!(
            "cannot resize an empty {}x{} image",
            image.width(),
            image.height()
        )));
    }

    let resized = image.as_image().resize_exact(width, height, FilterType::Triangle);
    debug!("Resized {} -> {}x{}", image, resized.width(), resized.height());

    Ok(RasterImage::new(resized))
}
