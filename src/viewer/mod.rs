//! Preview windows
//!
//! The pipeline shows its input and output through the `Viewer` trait. With
//! the `preview` feature the windows are OpenCV highgui windows; without it
//! a headless viewer stands in and only logs what it would have shown.

mod headless;
#[cfg(feature = "preview")]
mod highgui;

use image::DynamicImage;

use crate::errors::CropResult;

pub use headless::HeadlessViewer;
#[cfg(feature = "preview")]
pub use highgui::HighGuiViewer;

/// Title of the window showing the input
pub const INPUT_WINDOW: &str = "cropsquare: input";
/// Title of the window showing the output
pub const OUTPUT_WINDOW: &str = "cropsquare: output";
/// Key code that ends the preview
pub const ESCAPE_KEY: i32 = 27;
/// Key poll interval in milliseconds
pub const POLL_INTERVAL_MS: i32 = 1;

/// Something that can display images until the user dismisses them
pub trait Viewer {
    /// Show `image` in a window called `title`
    fn show(&mut self, title: &str, image: &DynamicImage) -> CropResult<()>;

    /// Block until the Escape key is pressed
    fn wait_for_escape(&mut self) -> CropResult<()>;

    /// Close every window opened by this viewer
    fn close_all(&mut self) -> CropResult<()>;
}

/// Create the best viewer available in this build
pub fn create_viewer() -> Box<dyn Viewer> {
    #[cfg(feature = "preview")]
    {
        Box::new(HighGuiViewer::new())
    }
    #[cfg(not(feature = "preview"))]
    {
        Box::new(HeadlessViewer::new())
    }
}
