//! Command-line interface definition

use clap::{value_parser, Arg, ArgAction, Command as ClapCommand};

pub const DEFAULT_INPUT: &str = "input.jpg";
pub const DEFAULT_OUTPUT: &str = "output.jpg";
pub const DEFAULT_WIDTH: i64 = 120;
pub const DEFAULT_HEIGHT: i64 = 120;
pub const DEFAULT_MODE: &str = "crop";

/// Build the clap command for the `cropsquare` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("cropsquare")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Crop an image to a square at its origin, resize it and save it")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("graphical")
                .short('g')
                .long("graphical")
                .help("Show input and output in preview windows until Escape is pressed")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("Input image file")
                .value_name("FILE")
                .default_value(DEFAULT_INPUT),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output image file, its extension selects the format")
                .value_name("FILE")
                .default_value(DEFAULT_OUTPUT),
        )
        .arg(
            Arg::new("width")
                .short('w')
                .long("width")
                .help("Output width in pixels")
                .value_name("PIXELS")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .default_value("120"),
        )
        .arg(
            Arg::new("height")
                .short('H')
                .long("height")
                .help("Output height in pixels")
                .value_name("PIXELS")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .default_value("120"),
        )
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .help("Pipeline to run; only contours draws the edge overlay into the --graphical preview")
                .value_name("MODE")
                .value_parser(["resize", "crop", "contours"])
                .default_value(DEFAULT_MODE),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML file providing default option values")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Also write log records to this file")
                .value_name("FILE"),
        )
}
