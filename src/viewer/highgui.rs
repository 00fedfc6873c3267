use image::DynamicImage;
use log::{debug, info};
use opencv::{
    core::{self, Mat, Scalar},
    highgui,
    prelude::*,
};

use crate::errors::{CropError, CropResult};

use super::{Viewer, ESCAPE_KEY, POLL_INTERVAL_MS};

fn preview_error(e: opencv::Error) -> CropError {
    CropError::Preview(e.to_string())
}

/// Copy an image into a BGR `Mat`
fn to_bgr_mat(image: &DynamicImage) -> opencv::Result<Mat> {
    let rgb = image.to_rgb8();
    let mut mat = Mat::new_rows_cols_with_default(
        rgb.height() as i32,
        rgb.width() as i32,
        core::CV_8UC3,
        Scalar::all(0.0),
    )?;

    let data = mat.data_bytes_mut()?;
    for (dst, src) in data.chunks_exact_mut(3).zip(rgb.pixels()) {
        dst[0] = src[2];
        dst[1] = src[1];
        dst[2] = src[0];
    }
    Ok(mat)
}

/// OpenCV highgui windows
#[derive(Debug, Default)]
pub struct HighGuiViewer {
    windows: Vec<String>,
}

impl HighGuiViewer {
    pub fn new() -> Self {
        HighGuiViewer::default()
    }
}

impl Viewer for HighGuiViewer {
    fn show(&mut self, title: &str, image: &DynamicImage) -> CropResult<()> {
        let mat = to_bgr_mat(image).map_err(preview_error)?;
        highgui::named_window(title, highgui::WINDOW_AUTOSIZE).map_err(preview_error)?;
        highgui::imshow(title, &mat).map_err(preview_error)?;
        debug!("Showing '{}' ({}x{})", title, image.width(), image.height());
        self.windows.push(title.to_string());
        Ok(())
    }

    fn wait_for_escape(&mut self) -> CropResult<()> {
        if self.windows.is_empty() {
            return Ok(());
        }
        info!("Press Escape to close the preview");
        loop {
            let key = highgui::wait_key(POLL_INTERVAL_MS).map_err(preview_error)?;
            if key & 0xff == ESCAPE_KEY {
                return Ok(());
            }
        }
    }

    fn close_all(&mut self) -> CropResult<()> {
        highgui::destroy_all_windows().map_err(preview_error)?;
        self.windows.clear();
        Ok(())
    }
}
