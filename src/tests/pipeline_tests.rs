//! Tests for the full pipeline

use crate::commands::{Command, CropCommand};
use crate::errors::CropError;
use crate::extractor::Region;
use crate::io::load_image;
use crate::options::{PipelineMode, RunOptions};
use crate::pipeline::run;
use crate::viewer::{HeadlessViewer, Viewer, INPUT_WINDOW, OUTPUT_WINDOW};

use super::test_utils::{block_image, gradient_image, write_image, RecordingViewer};

#[test]
fn test_crop_mode() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_image(dir.path(), "in.png", &gradient_image(64, 48));
    let output = dir.path().join("out.png");
    let options = RunOptions::new(&input, &output).with_size(16, 16);

    let report = run(&options, &mut HeadlessViewer::new()).unwrap();

    assert_eq!(report.source_dimensions, (64, 48));
    assert_eq!(report.region, Some(Region::new(0, 0, 48, 48)));
    assert_eq!(report.output_dimensions, (16, 16));
    assert_eq!(report.contour_counts, None);
    assert_eq!(load_image(&output).unwrap().dimensions(), (16, 16));
}

#[test]
fn test_resize_mode_skips_crop() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_image(dir.path(), "in.png", &gradient_image(64, 48));
    let output = dir.path().join("out.png");
    let options = RunOptions::new(&input, &output)
        .with_size(32, 10)
        .with_mode(PipelineMode::Resize);

    let report = run(&options, &mut HeadlessViewer::new()).unwrap();

    assert_eq!(report.region, None);
    assert_eq!(load_image(&output).unwrap().dimensions(), (32, 10));
}

#[test]
fn test_contours_do_not_change_saved_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_image(dir.path(), "in.png", &block_image(80, 20, 60));
    let cropped_path = dir.path().join("crop.png");
    let contour_path = dir.path().join("contours.png");

    run(&RunOptions::new(&input, &cropped_path).with_size(40, 40), &mut HeadlessViewer::new()).unwrap();
    let report = run(
        &RunOptions::new(&input, &contour_path)
            .with_size(40, 40)
            .with_mode(PipelineMode::Contours),
        &mut HeadlessViewer::new(),
    )
    .unwrap();

    let (outer, holes) = report.contour_counts.unwrap();
    assert!(outer >= 1);
    assert!(holes >= 1);

    let cropped = load_image(&cropped_path).unwrap();
    let traced = load_image(&contour_path).unwrap();
    assert_eq!(cropped.as_image().to_rgb8(), traced.as_image().to_rgb8());
}

#[test]
fn test_graphical_shows_input_and_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_image(dir.path(), "in.png", &gradient_image(30, 20));
    let options = RunOptions::new(&input, dir.path().join("out.png"))
        .with_size(8, 6)
        .with_graphical(true);

    let mut viewer = RecordingViewer::default();
    run(&options, &mut viewer).unwrap();

    assert_eq!(
        viewer.shown,
        vec![(INPUT_WINDOW.to_string(), 30, 20), (OUTPUT_WINDOW.to_string(), 8, 6)]
    );
    assert!(viewer.waited);
    assert!(viewer.closed);
}

#[test]
fn test_viewer_unused_without_graphical() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_image(dir.path(), "in.png", &gradient_image(10, 10));
    let mut viewer = RecordingViewer::default();

    run(&RunOptions::new(&input, dir.path().join("out.png")), &mut viewer).unwrap();

    assert!(viewer.shown.is_empty());
    assert!(!viewer.waited);
}

#[test]
fn test_invalid_size_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_image(dir.path(), "in.png", &gradient_image(10, 10));
    let output = dir.path().join("out.png");

    let result = run(&RunOptions::new(&input, &output).with_size(0, 10), &mut HeadlessViewer::new());

    assert!(matches!(result, Err(CropError::InvalidDimensions { width: 0, height: 10 })));
    assert!(!output.exists());
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.png");
    let options = RunOptions::new(dir.path().join("missing.png"), &output);

    let result = run(&options, &mut HeadlessViewer::new());

    assert!(matches!(result, Err(CropError::InputNotFound(_))));
    assert!(!output.exists());
}

#[test]
fn test_command_keeps_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_image(dir.path(), "in.png", &gradient_image(20, 30));
    let mut command = CropCommand::with_viewer(
        RunOptions::new(&input, dir.path().join("out.bmp")).with_size(5, 5),
        Box::new(HeadlessViewer::new()),
    );

    assert!(command.report().is_none());
    command.execute().unwrap();

    let report = command.report().unwrap();
    assert_eq!(report.region, Some(Region::new(0, 0, 20, 20)));
    assert_eq!(report.output_dimensions, (5, 5));
}

#[test]
fn test_command_keeps_options() {
    let options = RunOptions::new("in.png", "out.png")
        .with_size(30, 40)
        .with_mode(PipelineMode::Contours);
    let command = CropCommand::new(options);

    assert_eq!(command.options().width, 30);
    assert_eq!(command.options().height, 40);
    assert_eq!(command.options().mode, PipelineMode::Contours);
    assert!(!command.options().graphical);
}

#[test]
fn test_headless_viewer_records_titles() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_image(dir.path(), "in.png", &gradient_image(8, 8));
    let output = dir.path().join("out.png");
    let mut viewer = HeadlessViewer::new();

    viewer.show(INPUT_WINDOW, &gradient_image(8, 8)).unwrap();
    viewer.show(OUTPUT_WINDOW, &gradient_image(4, 4)).unwrap();
    assert_eq!(viewer.shown(), [INPUT_WINDOW, OUTPUT_WINDOW]);

    viewer.close_all().unwrap();
    assert!(viewer.shown().is_empty());

    let options = RunOptions::new(&input, &output).with_size(4, 4).with_graphical(true);
    run(&options, &mut viewer).unwrap();
    assert!(viewer.shown().is_empty());
    assert!(output.exists());
}
