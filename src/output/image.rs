use opencv::{core::Vector, imgcodecs, prelude::*};

use crate::decoder::FrameData;
use crate::error::MeanError;
use crate::utils::logger;

fn write_failed(path: &str, reason: String) -> MeanError {
    MeanError::Write {
        path: path.to_string(),
        reason,
    }
}

/// Encodes a frame to an image file, format chosen by extension.
///
/// The buffer is handed to OpenCV as-is, so it must be in OpenCV's
/// native channel order (BGR for color frames).
pub fn write_image(path: &str, frame: &FrameData) -> Result<(), MeanError> {
    let flat = Mat::from_slice(&frame.buffer).map_err(|e| write_failed(path, e.to_string()))?;
    let mat = flat
        .reshape(frame.channels as i32, frame.height as i32)
        .map_err(|e| write_failed(path, e.to_string()))?;

    let written = imgcodecs::imwrite(path, &mat, &Vector::new())
        .map_err(|e| write_failed(path, e.to_string()))?;
    if !written {
        return Err(write_failed(path, "encoder rejected the image".to_string()));
    }

    logger::info(&format!("Wrote {} ({})", path, frame.shape()));
    Ok(())
}
