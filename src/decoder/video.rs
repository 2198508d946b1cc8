use opencv::{core, prelude::*, videoio};

use super::frame_data::FrameData;
use super::FrameSource;
use crate::error::MeanError;
use crate::utils::logger;

/// Frame source backed by an OpenCV `VideoCapture`.
///
/// Produces frames in decode order until end of stream. The capture
/// handle is released on drop, early failure included.
pub struct VideoDecoder {
    capture: videoio::VideoCapture,
    fps: f64,
    width: u32,
    height: u32,
}

impl VideoDecoder {
    pub fn open(path: &str) -> Result<Self, MeanError> {
        logger::debug(&format!("Opening video with OpenCV: {}", path));

        // CAP_ANY lets OpenCV choose the best backend
        // macOS: AVFoundation, Windows: Media Foundation, Linux: V4L2/GStreamer
        let mut capture = videoio::VideoCapture::from_file(path, videoio::CAP_ANY)
            .map_err(|e| MeanError::Open(format!("{} ({})", path, e)))?;

        // Try to enforce HW acceleration; not all backends honor this
        let _ = capture.set(
            videoio::CAP_PROP_HW_ACCELERATION,
            videoio::VIDEO_ACCELERATION_ANY as f64,
        );

        let opened = capture
            .is_opened()
            .map_err(|e| MeanError::Open(format!("{} ({})", path, e)))?;
        if !opened {
            logger::error(&format!("Failed to open video file: {}", path));
            return Err(MeanError::Open(path.to_string()));
        }

        let fps = capture.get(videoio::CAP_PROP_FPS)?;
        let width = capture.get(videoio::CAP_PROP_FRAME_WIDTH)? as u32;
        let height = capture.get(videoio::CAP_PROP_FRAME_HEIGHT)? as u32;

        logger::debug(&format!(
            "VideoCapture opened: {}x{} @ {:.2} fps",
            width, height, fps
        ));

        Ok(Self {
            capture,
            fps,
            width,
            height,
        })
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn frame_width(&self) -> u32 {
        self.width
    }

    pub fn frame_height(&self) -> u32 {
        self.height
    }
}

impl FrameSource for VideoDecoder {
    fn read_frame(&mut self) -> Result<Option<FrameData>, MeanError> {
        let mut mat = Mat::default();

        if !self.capture.read(&mut mat)? {
            logger::debug("Decoder EOF");
            return Ok(None);
        }
        if mat.empty() {
            logger::debug("Decoder returned empty frame, treating as EOF");
            return Ok(None);
        }

        if mat.depth() != core::CV_8U {
            return Err(MeanError::Decode(opencv::Error::new(
                core::StsUnsupportedFormat,
                format!("expected 8-bit samples, got depth {}", mat.depth()),
            )));
        }

        // data_bytes() requires a continuous buffer; a clone compacts it
        let mat = if mat.is_continuous() {
            mat
        } else {
            mat.try_clone()?
        };

        let width = mat.cols() as u32;
        let height = mat.rows() as u32;
        let channels = mat.channels() as u32;
        let buffer = mat.data_bytes()?.to_vec();

        Ok(Some(FrameData::new(buffer, width, height, channels)))
    }
}

impl Drop for VideoDecoder {
    fn drop(&mut self) {
        let _ = self.capture.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_nonexistent_path() {
        let result = VideoDecoder::open("definitely/not/a/real/video.mp4");
        match result {
            Err(MeanError::Open(msg)) => assert!(msg.contains("video.mp4")),
            Err(other) => panic!("expected Open error, got {:?}", other),
            Ok(_) => panic!("expected Open error, got a decoder"),
        }
    }
}
