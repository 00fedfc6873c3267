//! Optional TOML configuration file
//!
//! Every key is optional. Values found here replace the built-in defaults
//! and are themselves overridden by flags given on the command line.
//!
//! ```toml
//! input = "photo.png"
//! output = "thumb.png"
//! width = 64
//! height = 64
//! mode = "contours"
//! log_file = "cropsquare.log"
//!
//! [edges]
//! low_threshold = 50
//! high_threshold = 150
//! dilation_radius = 1
//! ```

use std::fs;
use std::path::Path;

use log::warn;
use toml::value::Table;

use crate::errors::{CropError, CropResult};

const KNOWN_KEYS: &[&str] = &[
    "input", "output", "width", "height", "verbose", "graphical", "mode", "log_file", "edges",
];
const KNOWN_EDGE_KEYS: &[&str] = &["low_threshold", "high_threshold", "dilation_radius"];

/// Edge detection overrides from the `[edges]` table
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EdgeOverrides {
    pub low_threshold: Option<f32>,
    pub high_threshold: Option<f32>,
    pub dilation_radius: Option<u8>,
}

/// Values read from a configuration file
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FileConfig {
    pub input: Option<String>,
    pub output: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub verbose: Option<bool>,
    pub graphical: Option<bool>,
    pub mode: Option<String>,
    pub log_file: Option<String>,
    pub edges: EdgeOverrides,
}

impl FileConfig {
    /// Parse a configuration from a TOML string
    pub fn from_str(content: &str) -> CropResult<Self> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| CropError::Config(format!("Failed to parse TOML: {}", e)))?;

        let table = toml_value
            .as_table()
            .ok_or_else(|| CropError::Config("top level must be a table".to_string()))?;

        warn_unknown_keys(table, KNOWN_KEYS, "");

        let mut config = FileConfig {
            input: get_string(table, "input")?,
            output: get_string(table, "output")?,
            width: get_integer(table, "width")?,
            height: get_integer(table, "height")?,
            verbose: get_bool(table, "verbose")?,
            graphical: get_bool(table, "graphical")?,
            mode: get_string(table, "mode")?,
            log_file: get_string(table, "log_file")?,
            edges: EdgeOverrides::default(),
        };

        if let Some(edges) = table.get("edges") {
            let edges = edges
                .as_table()
                .ok_or_else(|| CropError::Config("'edges' must be a table".to_string()))?;
            warn_unknown_keys(edges, KNOWN_EDGE_KEYS, "edges.");

            config.edges.low_threshold = get_float(edges, "low_threshold")?;
            config.edges.high_threshold = get_float(edges, "high_threshold")?;
            config.edges.dilation_radius = match get_integer(edges, "dilation_radius")? {
                Some(radius) => Some(u8::try_from(radius).map_err(|_| {
                    CropError::Config(format!("'edges.dilation_radius' out of range: {}", radius))
                })?),
                None => None,
            };
        }

        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> CropResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CropError::Config(format!("could not read {}: {}", path.display(), e))
        })?;

        Self::from_str(&contents)
    }
}

fn warn_unknown_keys(table: &Table, known: &[&str], prefix: &str) {
    for key in table.keys() {
        if !known.contains(&key.as_str()) {
            warn!("Ignoring unknown configuration key '{}{}'", prefix, key);
        }
    }
}

fn type_error(key: &str, expected: &str) -> CropError {
    CropError::Config(format!("'{}' must be {}", key, expected))
}

fn get_string(table: &Table, key: &str) -> CropResult<Option<String>> {
    match table.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| type_error(key, "a string")),
    }
}

fn get_integer(table: &Table, key: &str) -> CropResult<Option<i64>> {
    match table.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_integer()
            .map(Some)
            .ok_or_else(|| type_error(key, "an integer")),
    }
}

fn get_bool(table: &Table, key: &str) -> CropResult<Option<bool>> {
    match table.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_bool()
            .map(Some)
            .ok_or_else(|| type_error(key, "true or false")),
    }
}

// Integers are accepted too, thresholds are usually written as whole numbers
fn get_float(table: &Table, key: &str) -> CropResult<Option<f32>> {
    match table.get(key) {
        None => Ok(None),
        Some(toml::Value::Float(f)) => Ok(Some(*f as f32)),
        Some(toml::Value::Integer(i)) => Ok(Some(*i as f32)),
        Some(_) => Err(type_error(key, "a number")),
    }
}
