//! Unit tests for the pipeline stages

mod contour_tests;
mod options_tests;
mod pipeline_tests;
