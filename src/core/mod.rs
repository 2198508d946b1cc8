pub mod accumulator;
pub mod pipeline;

pub use accumulator::FrameAccumulator;
pub use pipeline::{compute_mean, MeanFrame};
