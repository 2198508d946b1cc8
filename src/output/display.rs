use anyhow::Result;

use crate::decoder::FrameData;

/// Optional side-effect collaborator that shows a frame to the user.
/// Display failures never affect the computed output.
pub trait FrameDisplay {
    fn show(&self, frame: &FrameData) -> Result<()>;
}

/// Headless default: does nothing.
pub struct NullDisplay;

impl FrameDisplay for NullDisplay {
    fn show(&self, _frame: &FrameData) -> Result<()> {
        Ok(())
    }
}

/// Opens a highgui window and blocks until a key is pressed.
#[cfg(feature = "display")]
pub struct WindowDisplay;

#[cfg(feature = "display")]
impl FrameDisplay for WindowDisplay {
    fn show(&self, frame: &FrameData) -> Result<()> {
        use opencv::{highgui, prelude::*};

        use crate::shared::constants;

        let flat = Mat::from_slice(&frame.buffer)?;
        let mat = flat.reshape(frame.channels as i32, frame.height as i32)?;

        highgui::imshow(constants::DISPLAY_WINDOW_TITLE, &mat)?;
        highgui::wait_key(0)?;
        highgui::destroy_all_windows()?;
        Ok(())
    }
}
