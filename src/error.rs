use crate::decoder::frame_data::FrameShape;
use thiserror::Error;

/// Terminal failures of the mean-frame pipeline. None of these are
/// retried; the process reports them and exits non-zero.
#[derive(Debug, Error)]
pub enum MeanError {
    #[error("cannot open video file: {0}")]
    Open(String),

    #[error("no frames read from video")]
    EmptyStream,

    #[error("frame shape changed mid-stream: expected {expected}, got {actual}")]
    ShapeMismatch {
        expected: FrameShape,
        actual: FrameShape,
    },

    #[error("cannot write output image {path}: {reason}")]
    Write { path: String, reason: String },

    #[error("decode error: {0}")]
    Decode(#[from] opencv::Error),
}
