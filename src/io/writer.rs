//! Image encoding
//!
//! Writes a raster to disk in the format implied by the output extension.
//! The encoder writes into a temporary file next to the target, which is
//! renamed over the target only once encoding has succeeded.

use std::borrow::Cow;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ColorType, DynamicImage, ImageFormat};
use log::{debug, info};

use crate::errors::{CropError, CropResult};
use crate::raster::RasterImage;

const TEMP_PREFIX: &str = ".cropsquare-";

/// Determine the output format from the path extension
pub fn output_format(path: &Path) -> CropResult<ImageFormat> {
    let unsupported = || CropError::UnsupportedFormat(path.display().to_string());
    let format = ImageFormat::from_path(path).map_err(|_| unsupported())?;
    if !format.writing_enabled() {
        return Err(unsupported());
    }
    Ok(format)
}

/// Color types the encoder for `format` accepts, preferred ones first
fn encodable_colors(format: ImageFormat) -> &'static [ColorType] {
    use ColorType::*;
    match format {
        ImageFormat::Png => &[L8, La8, Rgb8, Rgba8, L16, La16, Rgb16, Rgba16],
        ImageFormat::Tiff => &[L8, Rgb8, Rgba8, L16, Rgb16, Rgba16],
        ImageFormat::Pnm => &[L8, Rgb8, L16, Rgb16],
        ImageFormat::Jpeg => &[L8, Rgb8],
        ImageFormat::Gif | ImageFormat::Qoi => &[Rgb8, Rgba8],
        ImageFormat::Farbfeld => &[Rgba16],
        ImageFormat::Hdr => &[Rgb32F],
        ImageFormat::OpenExr => &[Rgb32F, Rgba32F],
        _ => &[L8, La8, Rgb8, Rgba8],
    }
}

fn bits_per_channel(color: ColorType) -> u16 {
    color.bits_per_pixel() / u16::from(color.channel_count())
}

/// Pick the accepted color type losing the least information from `color`
///
/// Losing color weighs most, then alpha, then sample depth; extra channels
/// are the last resort.
fn target_color(color: ColorType, accepted: &[ColorType]) -> Option<ColorType> {
    accepted.iter().copied().min_by_key(|candidate| {
        (
            color.has_color() && !candidate.has_color(),
            color.has_alpha() && !candidate.has_alpha(),
            bits_per_channel(*candidate) < bits_per_channel(color),
            candidate.channel_count() > color.channel_count(),
        )
    })
}

fn convert(image: &DynamicImage, color: ColorType) -> DynamicImage {
    match color {
        ColorType::L8 => DynamicImage::ImageLuma8(image.to_luma8()),
        ColorType::La8 => DynamicImage::ImageLumaA8(image.to_luma_alpha8()),
        ColorType::Rgb8 => DynamicImage::ImageRgb8(image.to_rgb8()),
        ColorType::L16 => DynamicImage::ImageLuma16(image.to_luma16()),
        ColorType::La16 => DynamicImage::ImageLumaA16(image.to_luma_alpha16()),
        ColorType::Rgb16 => DynamicImage::ImageRgb16(image.to_rgb16()),
        ColorType::Rgba16 => DynamicImage::ImageRgba16(image.to_rgba16()),
        ColorType::Rgb32F => DynamicImage::ImageRgb32F(image.to_rgb32f()),
        ColorType::Rgba32F => DynamicImage::ImageRgba32F(image.to_rgba32f()),
        _ => DynamicImage::ImageRgba8(image.to_rgba8()),
    }
}

/// Convert buffers the target encoder cannot take as-is
///
/// JPEG for instance only stores 8-bit greyscale or RGB, so alpha is dropped
/// and 16-bit samples are narrowed before encoding.
fn prepare_for_format(image: &DynamicImage, format: ImageFormat) -> Cow<'_, DynamicImage> {
    let accepted = encodable_colors(format);
    let color = image.color();
    if accepted.contains(&color) {
        return Cow::Borrowed(image);
    }
    match target_color(color, accepted) {
        Some(target) => {
            debug!("Converting {:?} to {:?} for {:?}", color, target, format);
            Cow::Owned(convert(image, target))
        }
        None => Cow::Borrowed(image),
    }
}

/// Encode `image` to `path`
///
/// # Arguments
/// * `image` - The raster to save
/// * `path` - Output path; its extension selects the format
///
/// # Returns
/// Ok on success. On failure the target path is left untouched.
pub fn save_image(image: &RasterImage, path: &Path) -> CropResult<()> {
    let format = output_format(path)?;
    info!("Saving image as {} ({:?})", path.display(), format);

    let encode_error = |message: String| CropError::Encode {
        path: path.display().to_string(),
        message,
    };

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .tempfile_in(directory)
        .map_err(|e| encode_error(e.to_string()))?;
    debug!("Encoding into temporary file {}", temp.path().display());

    let prepared = prepare_for_format(image.as_image(), format);
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        prepared
            .write_to(&mut writer, format)
            .map_err(|e| encode_error(e.to_string()))?;
        writer.flush().map_err(|e| encode_error(e.to_string()))?;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(|e| encode_error(e.to_string()))?;
    }

    temp.persist(path).map_err(|e| encode_error(e.error.to_string()))?;
    info!("Saved {}x{} image to {}", image.width(), image.height(), path.display());

    Ok(())
}
