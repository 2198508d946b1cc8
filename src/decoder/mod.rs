pub mod frame_data;
pub mod video;

pub use frame_data::FrameData;
pub use video::VideoDecoder;

use crate::error::MeanError;

/// A finite, non-restartable sequence of decoded frames.
pub trait FrameSource {
    /// Returns the next frame, or `None` at end of stream.
    fn read_frame(&mut self) -> Result<Option<FrameData>, MeanError>;
}
