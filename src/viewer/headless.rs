use image::DynamicImage;
use log::{info, warn};

use crate::errors::CropResult;

use super::Viewer;

/// Viewer for builds without window support
#[derive(Debug, Default)]
pub struct HeadlessViewer {
    shown: Vec<String>,
    warned: bool,
}

impl HeadlessViewer {
    pub fn new() -> Self {
        HeadlessViewer::default()
    }

    /// Titles of the windows that would have been opened
    pub fn shown(&self) -> &[String] {
        &self.shown
    }
}

impl Viewer for HeadlessViewer {
    fn show(&mut self, title: &str, image: &DynamicImage) -> CropResult<()> {
        if !self.warned {
            warn!("Preview windows are not available in this build (enable the 'preview' feature)");
            self.warned = true;
        }
        info!("Would show '{}' ({}x{})", title, image.width(), image.height());
        self.shown.push(title.to_string());
        Ok(())
    }

    fn wait_for_escape(&mut self) -> CropResult<()> {
        Ok(())
    }

    fn close_all(&mut self) -> CropResult<()> {
        self.shown.clear();
        Ok(())
    }
}
