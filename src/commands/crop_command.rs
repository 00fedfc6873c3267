//! Crop-and-resize command
//!
//! Runs the image pipeline for one set of options and keeps the report of
//! the last run.

use log::{error, info};

use crate::commands::command_traits::Command;
use crate::errors::CropResult;
use crate::options::RunOptions;
use crate::pipeline::{self, PipelineReport};
use crate::viewer::{create_viewer, HeadlessViewer, Viewer};

/// Command that turns one input image into one output image
pub struct CropCommand {
    /// Resolved run configuration
    options: RunOptions,
    /// Preview backend
    viewer: Box<dyn Viewer>,
    /// Report of the last successful execution
    report: Option<PipelineReport>,
}

impl CropCommand {
    /// Create a command using the default viewer for this build
    ///
    /// A real window backend is only created when the preview was asked for.
    pub fn new(options: RunOptions) -> Self {
        let viewer: Box<dyn Viewer> = if options.graphical {
            create_viewer()
        } else {
            Box::new(HeadlessViewer::new())
        };
        Self::with_viewer(options, viewer)
    }

    /// Create a command with an explicit preview backend
    pub fn with_viewer(options: RunOptions, viewer: Box<dyn Viewer>) -> Self {
        CropCommand {
            options,
            viewer,
            report: None,
        }
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Report of the last successful execution
    pub fn report(&self) -> Option<&PipelineReport> {
        self.report.as_ref()
    }
}

impl Command for CropCommand {
    fn execute(&mut self) -> CropResult<()> {
        info!(
            "Executing {} pipeline: {} -> {}",
            self.options.mode,
            self.options.input.display(),
            self.options.output.display()
        );

        match pipeline::run(&self.options, self.viewer.as_mut()) {
            Ok(report) => {
                if let Some((outer, holes)) = report.contour_counts {
                    info!("Contours: {} outer, {} holes", outer, holes);
                }
                self.report = Some(report);
                Ok(())
            }
            Err(e) => {
                error!("Pipeline failed: {}", e);
                Err(e)
            }
        }
    }
}
