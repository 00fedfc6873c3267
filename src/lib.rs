pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod extractor;
pub mod io;
pub mod options;
pub mod pipeline;
pub mod processing;
pub mod raster;
pub mod utils;
pub mod viewer;

#[cfg(test)]
mod tests;

pub use errors::{CropError, CropResult};
pub use extractor::Region;
pub use options::{PipelineMode, RunOptions};
pub use pipeline::{run, PipelineReport};
pub use raster::RasterImage;
