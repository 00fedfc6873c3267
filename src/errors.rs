//! Custom error types for the crop pipeline

use std::fmt;
use std::io;

use image::ImageError;

/// Errors raised while parsing options or running the pipeline
#[derive(Debug)]
pub enum CropError {
    /// The input file does not exist
    InputNotFound(String),
    /// The input file could not be decoded as an image
    Decode { path: String, source: ImageError },
    /// Requested output dimensions are not usable
    InvalidDimensions { width: i64, height: i64 },
    /// A region does not fit inside the source raster
    InvalidRegion { region: String, width: u32, height: u32 },
    /// The imaging library failed while processing
    Processing(String),
    /// The output could not be encoded or written
    Encode { path: String, message: String },
    /// The output extension does not name a known image format
    UnsupportedFormat(String),
    /// Bad configuration file or option value
    Config(String),
    /// Preview window failure
    Preview(String),
    /// I/O error
    IoError(io::Error),
}

impl fmt::Display for CropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CropError::InputNotFound(path) => write!(f, "Could not find input file {}.", path),
            CropError::Decode { path, source } => write!(f, "Could not load image {}: {}", path, source),
            CropError::InvalidDimensions { width, height } => {
                write!(f, "Invalid output dimensions {}x{}", width, height)
            }
            CropError::InvalidRegion { region, width, height } => {
                write!(f, "Region {} does not fit inside a {}x{} image", region, width, height)
            }
            CropError::Processing(msg) => write!(f, "Image processing failed: {}", msg),
            CropError::Encode { path, message } => write!(f, "Could not save image {}: {}", path, message),
            CropError::UnsupportedFormat(path) => {
                write!(f, "Could not save image {}: unsupported output format", path)
            }
            CropError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CropError::Preview(msg) => write!(f, "Preview error: {}", msg),
            CropError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for CropError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CropError::Decode { source, .. } => Some(source),
            CropError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CropError {
    fn from(error: io::Error) -> Self {
        CropError::IoError(error)
    }
}

impl From<ImageError> for CropError {
    fn from(error: ImageError) -> Self {
        CropError::Processing(error.to_string())
    }
}

/// Result type for pipeline operations
pub type CropResult<T> = Result<T, CropError>;
