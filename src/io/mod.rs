//! Image file input and output
//!
//! Decoding of the input image and atomic encoding of the output image.

pub mod loader;
pub mod writer;

pub use loader::{ensure_input_exists, load_image};
pub use writer::{output_format, save_image};
