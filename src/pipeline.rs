//! The image transform pipeline
//!
//! load -> (contours) -> square crop -> resize -> save -> (preview)
//!
//! Each stage takes the raster by value, so the buffer of a finished stage is
//! released as soon as the next one has produced its result. The contour
//! overlay is drawn on a copy and only ever reaches the preview; the saved
//! output is computed from the unmodified source pixels.

use std::path::PathBuf;

use image::DynamicImage;
use log::{debug, info};

use crate::errors::CropResult;
use crate::extractor::{crop_square, Region};
use crate::io::{load_image, output_format, save_image};
use crate::options::RunOptions;
use crate::processing::{resize, trace_contours, validate_dimensions};
use crate::utils::progress::ProgressTracker;
use crate::viewer::{Viewer, INPUT_WINDOW, OUTPUT_WINDOW};

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    /// Dimensions of the decoded input
    pub source_dimensions: (u32, u32),
    /// Region cut out of the input, `None` in resize mode
    pub region: Option<Region>,
    /// Dimensions of the written output
    pub output_dimensions: (u32, u32),
    /// Where the output was written
    pub output_path: PathBuf,
    /// Outer and hole contour counts, when the contour stage ran
    pub contour_counts: Option<(usize, usize)>,
}

fn stage_count(options: &RunOptions) -> u64 {
    let mut stages = 3; // load, resize, save
    if options.mode.crops() {
        stages += 1;
    }
    if options.mode.traces_contours() {
        stages += 1;
    }
    if options.graphical {
        stages += 1;
    }
    stages
}

/// Run the pipeline described by `options`
///
/// # Arguments
/// * `options` - Resolved run configuration
/// * `viewer` - Window backend used when `options.graphical` is set
///
/// # Returns
/// A report of what was done, or the first error encountered
pub fn run(options: &RunOptions, viewer: &mut dyn Viewer) -> CropResult<PipelineReport> {
    let progress = if options.verbose {
        ProgressTracker::hidden()
    } else {
        ProgressTracker::new(stage_count(options), "Loading")
    };

    let result = run_stages(options, viewer, &progress);
    match &result {
        Ok(_) => progress.finish(),
        Err(_) => progress.abandon(),
    }
    result
}

fn run_stages(options: &RunOptions, viewer: &mut dyn Viewer, progress: &ProgressTracker) -> CropResult<PipelineReport> {
    // Fail before decoding anything if the request cannot succeed
    validate_dimensions(options.width, options.height)?;
    output_format(&options.output)?;

    let source = load_image(&options.input)?;
    let source_dimensions = source.dimensions();
    progress.advance("Processing");

    let mut contour_counts = None;
    let mut preview_input: Option<DynamicImage> = None;

    if options.mode.traces_contours() {
        let overlay = trace_contours(&source, &options.edge_params)?;
        contour_counts = Some((overlay.outer_count(), overlay.hole_count()));
        if options.graphical {
            preview_input = Some(DynamicImage::ImageRgb8(overlay.annotated));
        }
        progress.advance("Cropping");
    } else if options.graphical {
        preview_input = Some(source.as_image().clone());
    }

    let (selected, region) = if options.mode.crops() {
        let (cropped, region) = crop_square(source)?;
        progress.advance("Resizing");
        (cropped, Some(region))
    } else {
        debug!("Resize mode, using the whole image");
        (source, None)
    };

    let output = resize(selected, options.width, options.height)?;
    progress.advance("Saving");

    save_image(&output, &options.output)?;
    progress.advance("Previewing");

    if let Some(input_image) = preview_input {
        viewer.show(INPUT_WINDOW, &input_image)?;
        drop(input_image);
        viewer.show(OUTPUT_WINDOW, output.as_image())?;
        viewer.wait_for_escape()?;
        viewer.close_all()?;
    }

    let report = PipelineReport {
        source_dimensions,
        region,
        output_dimensions: output.dimensions(),
        output_path: options.output.clone(),
        contour_counts,
    };
    info!(
        "Done: {}x{} -> {}x{} written to {}",
        report.source_dimensions.0,
        report.source_dimensions.1,
        report.output_dimensions.0,
        report.output_dimensions.1,
        report.output_path.display()
    );
    Ok(report)
}
