use crate::decoder::frame_data::{FrameData, FrameShape};
use crate::error::MeanError;

/// Running per-sample sum over a stream of identically shaped frames.
///
/// The sum buffer is f64 so that any realistic frame count times 255
/// accumulates without precision loss. The buffer is allocated lazily
/// from the shape of the first frame pushed.
pub struct FrameAccumulator {
    sum: Vec<f64>,
    shape: Option<FrameShape>,
    count: u64,
}

impl FrameAccumulator {
    pub fn new() -> Self {
        Self {
            sum: Vec::new(),
            shape: None,
            count: 0,
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.count
    }

    /// Adds one frame to the running sum.
    ///
    /// Every frame after the first must match the first frame's shape.
    pub fn push(&mut self, frame: &FrameData) -> Result<(), MeanError> {
        let shape = frame.shape();
        match self.shape {
            None => {
                self.sum = vec![0.0; shape.sample_count()];
                self.shape = Some(shape);
            }
            Some(expected) if expected != shape => {
                return Err(MeanError::ShapeMismatch {
                    expected,
                    actual: shape,
                });
            }
            Some(_) => {}
        }

        debug_assert_eq!(frame.buffer.len(), shape.sample_count());
        for (acc, &sample) in self.sum.iter_mut().zip(frame.buffer.iter()) {
            *acc += sample as f64;
        }
        self.count += 1;
        Ok(())
    }

    /// Divides the sum by the frame count and truncates back to u8.
    ///
    /// The cast floors the non-negative quotient, so 254 / 2 frames
    /// yields 127, matching the accumulation semantics of the sum type.
    pub fn finalize(self) -> Result<(FrameData, u64), MeanError> {
        let shape = match self.shape {
            Some(shape) if self.count > 0 => shape,
            _ => return Err(MeanError::EmptyStream),
        };

        let n = self.count as f64;
        let buffer: Vec<u8> = self.sum.iter().map(|&s| (s / n) as u8).collect();

        Ok((
            FrameData::new(buffer, shape.width, shape.height, shape.channels),
            self.count,
        ))
    }
}

impl Default for FrameAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(samples: &[u8], width: u32, height: u32, channels: u32) -> FrameData {
        FrameData::new(samples.to_vec(), width, height, channels)
    }

    #[test]
    fn test_single_frame_is_identity() {
        let input = frame(&[0, 1, 2, 127, 128, 255], 2, 1, 3);
        let mut acc = FrameAccumulator::new();
        acc.push(&input).unwrap();

        let (mean, count) = acc.finalize().unwrap();
        assert_eq!(count, 1);
        assert_eq!(mean.buffer, input.buffer);
        assert_eq!(mean.shape(), input.shape());
    }

    #[test]
    fn test_mean_truncates_toward_zero() {
        // (0 + 254) / 2 = 127, (1 + 2) / 2 = 1.5 -> 1
        let mut acc = FrameAccumulator::new();
        acc.push(&frame(&[0, 1], 2, 1, 1)).unwrap();
        acc.push(&frame(&[254, 2], 2, 1, 1)).unwrap();

        let (mean, count) = acc.finalize().unwrap();
        assert_eq!(count, 2);
        assert_eq!(mean.buffer, vec![127, 1]);
    }

    #[test]
    fn test_mean_is_floor_of_sum_over_n() {
        let frames = [[10u8, 200], [20, 201], [35, 202]];
        let mut acc = FrameAccumulator::new();
        for f in &frames {
            acc.push(&frame(f, 1, 1, 2)).unwrap();
        }

        let (mean, _) = acc.finalize().unwrap();
        // 65 / 3 = 21.66 -> 21, 603 / 3 = 201
        assert_eq!(mean.buffer, vec![21, 201]);
    }

    #[test]
    fn test_saturated_frames_do_not_overflow() {
        let white = frame(&[255; 4], 2, 2, 1);
        let mut acc = FrameAccumulator::new();
        for _ in 0..10_000 {
            acc.push(&white).unwrap();
        }

        let (mean, count) = acc.finalize().unwrap();
        assert_eq!(count, 10_000);
        assert_eq!(mean.buffer, vec![255; 4]);
    }

    #[test]
    fn test_empty_stream_fails() {
        let acc = FrameAccumulator::new();
        assert!(matches!(acc.finalize(), Err(MeanError::EmptyStream)));
    }

    #[test]
    fn test_shape_mismatch_fails_fast() {
        let mut acc = FrameAccumulator::new();
        acc.push(&frame(&[0; 12], 2, 2, 3)).unwrap();

        let err = acc.push(&frame(&[0; 6], 2, 1, 3)).unwrap_err();
        match err {
            MeanError::ShapeMismatch { expected, actual } => {
                assert_eq!(expected.to_string(), "2x2x3");
                assert_eq!(actual.to_string(), "2x1x3");
            }
            other => panic!("expected ShapeMismatch, got {:?}", other),
        }
    }
}
