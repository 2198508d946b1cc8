use super::accumulator::FrameAccumulator;
use crate::decoder::{FrameData, FrameSource};
use crate::error::MeanError;
use crate::utils::logger;

/// Mean frame plus the number of frames it was computed from.
pub struct MeanFrame {
    pub frame: FrameData,
    pub frame_count: u64,
}

/// Drains the source and averages every frame it yields.
///
/// Single pass, single thread: the accumulator is owned here and
/// mutated only by this loop.
pub fn compute_mean<S: FrameSource>(source: &mut S) -> Result<MeanFrame, MeanError> {
    let mut acc = FrameAccumulator::new();

    while let Some(frame) = source.read_frame()? {
        acc.push(&frame)?;
        if acc.frame_count() % 500 == 0 {
            logger::debug(&format!("Accumulated {} frames", acc.frame_count()));
        }
    }

    let (frame, frame_count) = acc.finalize()?;
    logger::info(&format!(
        "Mean frame computed from {} frames ({})",
        frame_count,
        frame.shape()
    ));

    Ok(MeanFrame { frame, frame_count })
}
