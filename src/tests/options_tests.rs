//! Tests for command-line and config resolution

use std::path::PathBuf;

use clap::error::ErrorKind;

use crate::cli::build_cli;
use crate::config::FileConfig;
use crate::errors::CropError;
use crate::options::{PipelineMode, RunOptions};

fn parse(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["cropsquare"];
    argv.extend_from_slice(args);
    build_cli().try_get_matches_from(argv).unwrap()
}

#[test]
fn test_defaults() {
    let options = RunOptions::merge(&parse(&[]), FileConfig::default()).unwrap();
    assert_eq!(options, RunOptions::default());
    assert_eq!(options.input, PathBuf::from("input.jpg"));
    assert_eq!(options.output, PathBuf::from("output.jpg"));
    assert_eq!((options.width, options.height), (120, 120));
    assert_eq!(options.mode, PipelineMode::Crop);
    assert!(!options.verbose);
    assert!(!options.graphical);
}

#[test]
fn test_short_and_long_flags() {
    let options = RunOptions::merge(
        &parse(&["-v", "-g", "-i", "a.png", "--output", "b.png", "-w", "64", "-H", "32", "-m", "contours"]),
        FileConfig::default(),
    )
    .unwrap();

    assert!(options.verbose);
    assert!(options.graphical);
    assert_eq!(options.input, PathBuf::from("a.png"));
    assert_eq!(options.output, PathBuf::from("b.png"));
    assert_eq!((options.width, options.height), (64, 32));
    assert_eq!(options.mode, PipelineMode::Contours);
}

#[test]
fn test_negative_dimensions_reach_validation() {
    let options = RunOptions::merge(&parse(&["-w", "-5", "--height", "0"]), FileConfig::default()).unwrap();
    assert_eq!((options.width, options.height), (-5, 0));
}

#[test]
fn test_config_values_apply() {
    let config = FileConfig::from_str("input = \"cfg.png\"\nwidth = 10\nmode = \"resize\"\ngraphical = true").unwrap();
    let options = RunOptions::merge(&parse(&[]), config).unwrap();

    assert_eq!(options.input, PathBuf::from("cfg.png"));
    assert_eq!(options.width, 10);
    assert_eq!(options.height, 120);
    assert_eq!(options.mode, PipelineMode::Resize);
    assert!(options.graphical);
}

#[test]
fn test_command_line_overrides_config() {
    let config = FileConfig::from_str("input = \"cfg.png\"\nwidth = 10\nmode = \"resize\"").unwrap();
    let options = RunOptions::merge(&parse(&["-i", "cli.png", "-w", "20", "-m", "crop"]), config).unwrap();

    assert_eq!(options.input, PathBuf::from("cli.png"));
    assert_eq!(options.width, 20);
    assert_eq!(options.mode, PipelineMode::Crop);
}

#[test]
fn test_config_edge_params() {
    let config = FileConfig::from_str("[edges]\nlow_threshold = 10\nhigh_threshold = 20").unwrap();
    let options = RunOptions::merge(&parse(&[]), config).unwrap();
    assert_eq!(options.edge_params.low_threshold, 10.0);
    assert_eq!(options.edge_params.high_threshold, 20.0);
    assert_eq!(options.edge_params.dilation_radius, 1);

    let bad = FileConfig::from_str("[edges]\nlow_threshold = 200\nhigh_threshold = 20").unwrap();
    assert!(RunOptions::merge(&parse(&[]), bad).is_err());
}

#[test]
fn test_bad_mode_in_config() {
    let config = FileConfig::from_str("mode = \"sharpen\"").unwrap();
    assert!(matches!(RunOptions::merge(&parse(&[]), config), Err(CropError::Config(_))));
}

#[test]
fn test_missing_input_is_reported() {
    let matches = parse(&["--input", "definitely-missing.png"]);
    let err = RunOptions::from_matches(&matches).unwrap_err();
    assert!(matches!(err, CropError::InputNotFound(_)));
    assert_eq!(err.to_string(), "Could not find input file definitely-missing.png.");
}

#[test]
fn test_parser_errors() {
    let help = build_cli().try_get_matches_from(["cropsquare", "--help"]).unwrap_err();
    assert_eq!(help.kind(), ErrorKind::DisplayHelp);

    let version = build_cli().try_get_matches_from(["cropsquare", "--version"]).unwrap_err();
    assert_eq!(version.kind(), ErrorKind::DisplayVersion);

    let bad_width = build_cli().try_get_matches_from(["cropsquare", "-w", "wide"]).unwrap_err();
    assert_eq!(bad_width.kind(), ErrorKind::ValueValidation);

    let bad_mode = build_cli().try_get_matches_from(["cropsquare", "-m", "sharpen"]).unwrap_err();
    assert_eq!(bad_mode.kind(), ErrorKind::InvalidValue);
}

#[test]
fn test_mode_names() {
    for mode in [PipelineMode::Resize, PipelineMode::Crop, PipelineMode::Contours] {
        assert_eq!(mode.as_str().parse::<PipelineMode>().unwrap(), mode);
    }
    assert!(PipelineMode::Crop.crops());
    assert!(!PipelineMode::Resize.crops());
    assert!(PipelineMode::Contours.traces_contours());
}
