//! Region of interest selection and extraction
//!
//! This module computes the square region used by the crop stage and copies
//! it out of the source raster.

mod region;
mod square;

// Public exports
pub use region::Region;
pub use square::{crop_square, extract_region, select_square};
