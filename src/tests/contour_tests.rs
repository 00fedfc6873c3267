//! Tests for the edge/contour stage

use image::{DynamicImage, GrayImage, Luma};
use imageproc::contours::BorderType;

use crate::errors::CropError;
use crate::processing::contours::{close_gaps, detect_edges, HOLE_COLOR, OUTER_COLOR};
use crate::processing::{trace_contours, EdgeParams};
use crate::raster::RasterImage;

use super::test_utils::block_image;

#[test]
fn test_default_edge_params() {
    let params = EdgeParams::default();
    assert_eq!(params.low_threshold, 63.0);
    assert_eq!(params.high_threshold, 191.0);
    assert_eq!(params.dilation_radius, 1);
    assert!(params.validate().is_ok());
}

#[test]
fn test_invalid_edge_params() {
    let swapped = EdgeParams { low_threshold: 200.0, high_threshold: 100.0, dilation_radius: 1 };
    assert!(matches!(swapped.validate(), Err(CropError::Config(_))));

    let out_of_range = EdgeParams { low_threshold: 10.0, high_threshold: 300.0, dilation_radius: 1 };
    assert!(out_of_range.validate().is_err());
}

#[test]
fn test_uniform_image_has_no_contours() {
    let image = RasterImage::new(DynamicImage::ImageLuma8(GrayImage::from_pixel(32, 32, Luma([128]))));
    let overlay = trace_contours(&image, &EdgeParams::default()).unwrap();

    assert!(overlay.contours.is_empty());
    assert_eq!(overlay.max_depth(), 0);
    assert!(overlay.edges.pixels().all(|p| p[0] == 0));
}

#[test]
fn test_block_edges_are_found() {
    let image = block_image(80, 20, 60);
    let edges = detect_edges(&image, &EdgeParams::default());
    assert!(edges.pixels().any(|p| p[0] > 0));
    // Far away from the block nothing changes
    assert_eq!(edges.get_pixel(2, 2)[0], 0);
}

#[test]
fn test_dilation_grows_edges() {
    let mut edges = GrayImage::new(9, 9);
    edges.put_pixel(4, 4, Luma([255]));

    let dilated = close_gaps(&edges, 1);
    let count = dilated.pixels().filter(|p| p[0] > 0).count();
    assert_eq!(count, 9);

    let untouched = close_gaps(&edges, 0);
    assert_eq!(untouched, edges);
}

#[test]
fn test_block_contour_hierarchy() {
    let image = RasterImage::new(block_image(80, 20, 60));
    let overlay = trace_contours(&image, &EdgeParams::default()).unwrap();

    // The dilated edge ring has an outer border and an inner hole
    assert!(overlay.outer_count() >= 1);
    assert!(overlay.hole_count() >= 1);
    assert!(overlay.max_depth() >= 2);

    let hole = overlay
        .contours
        .iter()
        .find(|c| c.border_type == BorderType::Hole)
        .unwrap();
    let parent = hole.parent.unwrap();
    assert_eq!(overlay.contours[parent].border_type, BorderType::Outer);
}

#[test]
fn test_overlay_is_drawn_on_a_copy() {
    let source = block_image(80, 20, 60);
    let image = RasterImage::new(source.clone());
    let overlay = trace_contours(&image, &EdgeParams::default()).unwrap();

    assert_eq!(overlay.annotated.dimensions(), (80, 80));
    assert!(overlay.annotated.pixels().any(|p| *p == OUTER_COLOR));
    assert!(overlay.annotated.pixels().any(|p| *p == HOLE_COLOR));

    // Source pixels are untouched
    assert_eq!(image.as_image().to_luma8(), source.to_luma8());
}
