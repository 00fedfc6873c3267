//! Run configuration
//!
//! `RunOptions` is resolved once at startup from the built-in defaults, an
//! optional config file and the command line, in increasing order of
//! precedence. Nothing changes it afterwards.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::info;

use crate::cli::{DEFAULT_HEIGHT, DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_WIDTH};
use crate::config::FileConfig;
use crate::errors::{CropError, CropResult};
use crate::io::ensure_input_exists;
use crate::processing::EdgeParams;

/// Which stages the pipeline runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineMode {
    /// Load, resize, save
    Resize,
    /// Load, square crop, resize, save
    #[default]
    Crop,
    /// Crop mode plus the edge/contour preview stage
    Contours,
}

impl PipelineMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineMode::Resize => "resize",
            PipelineMode::Crop => "crop",
            PipelineMode::Contours => "contours",
        }
    }

    /// Whether the square crop stage runs
    pub fn crops(&self) -> bool {
        !matches!(self, PipelineMode::Resize)
    }

    /// Whether the edge/contour stage runs
    pub fn traces_contours(&self) -> bool {
        matches!(self, PipelineMode::Contours)
    }
}

impl FromStr for PipelineMode {
    type Err = CropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "resize" => Ok(PipelineMode::Resize),
            "crop" => Ok(PipelineMode::Crop),
            "contours" => Ok(PipelineMode::Contours),
            other => Err(CropError::Config(format!(
                "unknown mode '{}', expected resize, crop or contours",
                other
            ))),
        }
    }
}

impl fmt::Display for PipelineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable configuration of one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: i64,
    pub height: i64,
    pub verbose: bool,
    pub graphical: bool,
    pub mode: PipelineMode,
    pub log_file: Option<PathBuf>,
    pub edge_params: EdgeParams,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            verbose: false,
            graphical: false,
            mode: PipelineMode::default(),
            log_file: None,
            edge_params: EdgeParams::default(),
        }
    }
}

/// Whether the user typed this argument, as opposed to clap filling in a default
fn given(matches: &ArgMatches, id: &str) -> bool {
    matches.value_source(id) == Some(ValueSource::CommandLine)
}

/// Command-line value if given, else config value, else the clap default
fn pick<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str, from_config: Option<T>, fallback: T) -> T {
    if given(matches, id) {
        if let Some(value) = matches.get_one::<T>(id) {
            return value.clone();
        }
    }
    from_config
        .or_else(|| matches.get_one::<T>(id).cloned())
        .unwrap_or(fallback)
}

/// Flags only ever switch on, so a flag set in either place wins
fn pick_flag(matches: &ArgMatches, id: &str, from_config: Option<bool>) -> bool {
    matches.get_flag(id) || from_config.unwrap_or(false)
}

impl RunOptions {
    /// Options for converting `input` into `output` with every other value defaulted
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        RunOptions {
            input: input.into(),
            output: output.into(),
            ..RunOptions::default()
        }
    }

    pub fn with_size(mut self, width: i64, height: i64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_mode(mut self, mode: PipelineMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_graphical(mut self, graphical: bool) -> Self {
        self.graphical = graphical;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Resolve options from parsed command-line arguments
    ///
    /// Reads the config file named by `--config` if any, merges it with the
    /// command line, and checks that the input file exists.
    ///
    /// # Arguments
    /// * `matches` - Arguments parsed by the command from `cli::build_cli`
    ///
    /// # Returns
    /// The resolved options, or an error for a bad config file or a missing input
    pub fn from_matches(matches: &ArgMatches) -> CropResult<Self> {
        let config = match matches.get_one::<String>("config") {
            Some(path) => FileConfig::from_file(&PathBuf::from(path))?,
            None => FileConfig::default(),
        };

        let options = Self::merge(matches, config)?;
        ensure_input_exists(&options.input)?;
        Ok(options)
    }

    /// Merge command-line arguments over a config file, without touching the filesystem
    pub fn merge(matches: &ArgMatches, config: FileConfig) -> CropResult<Self> {
        let input = pick(matches, "input", config.input, DEFAULT_INPUT.to_string());
        let output = pick(matches, "output", config.output, DEFAULT_OUTPUT.to_string());
        let width = pick(matches, "width", config.width, DEFAULT_WIDTH);
        let height = pick(matches, "height", config.height, DEFAULT_HEIGHT);

        let mode_name = pick(matches, "mode", config.mode, PipelineMode::default().to_string());
        let mode = mode_name.parse::<PipelineMode>()?;

        let log_file = matches
            .get_one::<String>("log-file")
            .cloned()
            .or(config.log_file)
            .map(PathBuf::from);

        let defaults = EdgeParams::default();
        let edge_params = EdgeParams {
            low_threshold: config.edges.low_threshold.unwrap_or(defaults.low_threshold),
            high_threshold: config.edges.high_threshold.unwrap_or(defaults.high_threshold),
            dilation_radius: config.edges.dilation_radius.unwrap_or(defaults.dilation_radius),
        };
        edge_params.validate()?;

        Ok(RunOptions {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            width,
            height,
            verbose: pick_flag(matches, "verbose", config.verbose),
            graphical: pick_flag(matches, "graphical", config.graphical),
            mode,
            log_file,
            edge_params,
        })
    }

    /// Echo the resolved configuration at info level
    pub fn log_summary(&self) {
        info!("Input image: {}", self.input.display());
        info!("Output image: {}", self.output.display());
        info!("Output size: {}x{}", self.width, self.height);
        info!("Mode: {}", self.mode);
        info!("Graphical preview: {}", self.graphical);
        if self.mode.traces_contours() {
            info!(
                "Edge thresholds: {}/{}, dilation radius {}",
                self.edge_params.low_threshold,
                self.edge_params.high_threshold,
                self.edge_params.dilation_radius
            );
        }
        if let Some(log_file) = &self.log_file {
            info!("Log file: {}", log_file.display());
        }
    }
}
