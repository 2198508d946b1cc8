use std::fmt;

/// Shape of a decoded frame: width x height x interleaved channels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FrameShape {
    pub width: u32,
    pub height: u32,
    pub channels: u32,
}

impl FrameShape {
    pub fn sample_count(&self) -> usize {
        self.width as usize * self.height as usize * self.channels as usize
    }
}

impl fmt::Display for FrameShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.channels)
    }
}

/// One decoded video frame, 8-bit samples in the decoder's native
/// channel order (BGR for color input).
#[derive(Clone)]
pub struct FrameData {
    pub buffer: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub channels: u32,
}

impl FrameData {
    pub fn new(buffer: Vec<u8>, width: u32, height: u32, channels: u32) -> Self {
        Self {
            buffer,
            width,
            height,
            channels,
        }
    }

    pub fn shape(&self) -> FrameShape {
        FrameShape {
            width: self.width,
            height: self.height,
            channels: self.channels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_display() {
        let frame = FrameData::new(vec![0; 2 * 3 * 3], 3, 2, 3);
        assert_eq!(frame.shape().to_string(), "3x2x3");
        assert_eq!(frame.shape().sample_count(), 18);
    }

    #[test]
    fn test_shape_equality() {
        let a = FrameData::new(vec![0; 12], 2, 2, 3);
        let b = FrameData::new(vec![255; 12], 2, 2, 3);
        let c = FrameData::new(vec![0; 8], 2, 2, 2);
        assert_eq!(a.shape(), b.shape());
        assert_ne!(a.shape(), c.shape());
    }
}
