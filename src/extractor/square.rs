//! Square region selection and extraction

use log::{debug, info};

use crate::errors::{CropError, CropResult};
use crate::raster::RasterImage;

use super::region::Region;

/// Compute the square region of interest for an image
///
/// The region is anchored at (0,0) with side `min(width, height)`.
pub fn select_square(image: &RasterImage) -> Region {
    let region = Region::square_at_origin(image.width(), image.height());
    debug!("Selected square region {} from {}x{} image", region, image.width(), image.height());
    region
}

/// Copy a region out of an image into a new buffer
///
/// Channel count and bit depth are preserved. Fails if the region does not
/// lie entirely inside the image.
pub fn extract_region(image: RasterImage, region: Region) -> CropResult<RasterImage> {
    let (width, height) = image.dimensions();
    if region.is_empty() || !region.fits_within(width, height) {
        return Err(CropError::InvalidRegion {
            region: region.to_string(),
            width,
            height,
        });
    }

    if region == Region::full(width, height) {
        debug!("Region covers the whole image, no copy needed");
        return Ok(image);
    }

    let cropped = image
        .as_image()
        .crop_imm(region.x, region.y, region.width, region.height);
    info!("Extracted region {} ({} -> {}x{})", region, image, cropped.width(), cropped.height());

    Ok(RasterImage::new(cropped))
}

/// Select the origin-anchored square and extract it in one step
pub fn crop_square(image: RasterImage) -> CropResult<(RasterImage, Region)> {
    let region = select_square(&image);
    let cropped = extract_region(image, region)?;
    Ok((cropped, region))
}
