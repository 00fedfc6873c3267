//! Pixel processing stages
//!
//! Thin wrappers around `image` and `imageproc` for the resize and
//! edge/contour stages.

pub mod contours;
pub mod resample;

pub use contours::{trace_contours, ContourOverlay, EdgeParams};
pub use resample::{resize, validate_dimensions, MAX_DIMENSION};
