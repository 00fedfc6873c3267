//! Command pattern interface
//!
//! Separates building a run from executing it, so the binary and the tests
//! drive the pipeline the same way.

use crate::errors::CropResult;
use crate::options::RunOptions;

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// Result indicating success or an error
    fn execute(&mut self) -> CropResult<()>;
}

/// Factory for creating commands from resolved options
pub trait CommandFactory {
    /// Create a new Command instance for `options`
    fn create_command(&self, options: RunOptions) -> CropResult<Box<dyn Command>>;
}
