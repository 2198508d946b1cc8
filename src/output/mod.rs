pub mod display;
pub mod image;

pub use display::{FrameDisplay, NullDisplay};
pub use image::write_image;
