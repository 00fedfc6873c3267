//! Image decoding
//!
//! Loads an image file into a `RasterImage`, guessing the format from the
//! file contents and falling back to the extension.

use std::path::Path;

use image::ImageReader;
use log::{debug, info};

use crate::errors::{CropError, CropResult};
use crate::raster::RasterImage;

/// Check that the input path names an existing file
pub fn ensure_input_exists(path: &Path) -> CropResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CropError::InputNotFound(path.display().to_string()))
    }
}

/// Decode the image at `path`
///
/// # Arguments
/// * `path` - Path to the image file
///
/// # Returns
/// The decoded raster, or an error if the file is missing or cannot be
/// decoded (corrupt data, unsupported format, empty file)
pub fn load_image(path: &Path) -> CropResult<RasterImage> {
    ensure_input_exists(path)?;
    info!("Loading image {}", path.display());

    let reader = ImageReader::open(path)?.with_guessed_format()?;
    debug!("Guessed input format: {:?}", reader.format());

    let image = reader.decode().map_err(|source| CropError::Decode {
        path: path.display().to_string(),
        source,
    })?;

    let raster = RasterImage::new(image);
    info!("Loaded {} ({})", path.display(), raster);
    Ok(raster)
}
