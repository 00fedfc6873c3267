//! Edge detection and contour overlay
//!
//! Produces a preview of the detected object outlines: the source is
//! converted to greyscale, run through Canny, dilated once to close small
//! gaps, and the full contour hierarchy of the result is drawn onto a copy
//! of the source. The source raster itself is never modified.

use image::{DynamicImage, GrayImage, Rgb, RgbImage};
use imageproc::contours::{find_contours, BorderType, Contour};
use imageproc::distance_transform::Norm;
use imageproc::drawing::draw_line_segment_mut;
use imageproc::edges::canny;
use imageproc::morphology::dilate;
use log::{debug, info};

use crate::errors::{CropError, CropResult};
use crate::raster::RasterImage;

/// Color used for outer borders
pub const OUTER_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Color used for hole borders
pub const HOLE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Parameters of the edge detection stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeParams {
    /// Canny low threshold (0-255 scale)
    pub low_threshold: f32,
    /// Canny high threshold (0-255 scale)
    pub high_threshold: f32,
    /// Chebyshev radius of the dilation element, 1 means 3x3
    pub dilation_radius: u8,
}

impl Default for EdgeParams {
    fn default() -> Self {
        EdgeParams {
            low_threshold: 63.0,
            high_threshold: 191.0,
            dilation_radius: 1,
        }
    }
}

impl EdgeParams {
    /// Check that the thresholds are ordered and on the 0-255 scale
    pub fn validate(&self) -> CropResult<()> {
        let in_range = |t: f32| (0.0..=255.0).contains(&t);
        if !in_range(self.low_threshold) || !in_range(self.high_threshold) {
            return Err(CropError::Config(format!(
                "edge thresholds must be between 0 and 255, got {}/{}",
                self.low_threshold, self.high_threshold
            )));
        }
        if self.low_threshold > self.high_threshold {
            return Err(CropError::Config(format!(
                "low edge threshold {} is above high threshold {}",
                self.low_threshold, self.high_threshold
            )));
        }
        Ok(())
    }
}

/// Result of the edge/contour stage
#[derive(Debug)]
pub struct ContourOverlay {
    /// Dilated binary edge map
    pub edges: GrayImage,
    /// Contours with their hierarchy (parent indices and border types)
    pub contours: Vec<Contour<i32>>,
    /// Copy of the source with the contours drawn on it
    pub annotated: RgbImage,
}

impl ContourOverlay {
    /// Number of outer borders
    pub fn outer_count(&self) -> usize {
        self.contours
            .iter()
            .filter(|c| c.border_type == BorderType::Outer)
            .count()
    }

    /// Number of hole borders
    pub fn hole_count(&self) -> usize {
        self.contours
            .iter()
            .filter(|c| c.border_type == BorderType::Hole)
            .count()
    }

    /// Deepest nesting level in the hierarchy, 0 when there are no contours
    pub fn max_depth(&self) -> usize {
        (0..self.contours.len())
            .map(|i| contour_depth(&self.contours, i))
            .max()
            .unwrap_or(0)
    }
}

/// Nesting level of contour `index`, top-level contours are at depth 1
fn contour_depth(contours: &[Contour<i32>], index: usize) -> usize {
    let mut depth = 1;
    let mut current = contours[index].parent;
    while let Some(parent) = current {
        depth += 1;
        current = contours.get(parent).and_then(|c| c.parent);
    }
    depth
}

/// Greyscale + Canny
pub fn detect_edges(image: &DynamicImage, params: &EdgeParams) -> GrayImage {
    let grey = image.to_luma8();
    canny(&grey, params.low_threshold, params.high_threshold)
}

/// Grow edge pixels into their neighbours to close small gaps
pub fn close_gaps(edges: &GrayImage, radius: u8) -> GrayImage {
    if radius == 0 {
        return edges.clone();
    }
    dilate(edges, Norm::LInf, radius)
}

/// Draw every contour as a closed polyline, outer and hole borders in
/// different colors
pub fn draw_contours(canvas: &mut RgbImage, contours: &[Contour<i32>]) {
    for contour in contours {
        let color = match contour.border_type {
            BorderType::Outer => OUTER_COLOR,
            BorderType::Hole => HOLE_COLOR,
        };

        let points = &contour.points;
        if let [only] = points.as_slice() {
            if only.x >= 0 && only.y >= 0 && (only.x as u32) < canvas.width() && (only.y as u32) < canvas.height() {
                canvas.put_pixel(only.x as u32, only.y as u32, color);
            }
            continue;
        }

        for (i, start) in points.iter().enumerate() {
            let end = points[(i + 1) % points.len()];
            draw_line_segment_mut(
                canvas,
                (start.x as f32, start.y as f32),
                (end.x as f32, end.y as f32),
                color,
            );
        }
    }
}

/// Run the whole edge/contour stage on `image`
///
/// # Arguments
/// * `image` - Source raster; only read
/// * `params` - Canny thresholds and dilation radius
///
/// # Returns
/// The edge map, the contour hierarchy and an annotated copy of the source
pub fn trace_contours(image: &RasterImage, params: &EdgeParams) -> CropResult<ContourOverlay> {
    params.validate()?;
    info!(
        "Detecting edges (thresholds {}/{}, dilation radius {})",
        params.low_threshold, params.high_threshold, params.dilation_radius
    );

    let edges = detect_edges(image.as_image(), params);
    let edges = close_gaps(&edges, params.dilation_radius);
    let contours = find_contours::<i32>(&edges);

    let mut annotated = image.as_image().to_rgb8();
    draw_contours(&mut annotated, &contours);

    let overlay = ContourOverlay {
        edges,
        contours,
        annotated,
    };
    info!(
        "Found {} contours ({} outer, {} holes, depth {})",
        overlay.contours.len(),
        overlay.outer_count(),
        overlay.hole_count(),
        overlay.max_depth()
    );
    debug!("Contour overlay drawn on a {}x{} copy", overlay.annotated.width(), overlay.annotated.height());

    Ok(overlay)
}
