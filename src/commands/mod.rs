//! CLI command implementations
//!
//! This module contains the commands run by the binary, using the Command
//! pattern.

pub mod command_traits;
pub mod crop_command;

pub use command_traits::{Command, CommandFactory};
pub use crop_command::CropCommand;

use crate::errors::CropResult;
use crate::options::RunOptions;

/// Factory for creating command instances from resolved options
pub struct CropsquareCommandFactory;

impl CropsquareCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CropsquareCommandFactory
    }
}

impl Default for CropsquareCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for CropsquareCommandFactory {
    fn create_command(&self, options: RunOptions) -> CropResult<Box<dyn Command>> {
        Ok(Box::new(CropCommand::new(options)))
    }
}
