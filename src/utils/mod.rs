//! Utility modules for common functionality
//!
//! Logging and progress reporting used throughout the application.

pub mod logger;
pub mod progress;
