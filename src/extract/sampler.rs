use crate::color::Rgb;

// Pixels below this alpha are background, not content.
const MIN_ALPHA: u8 = 100;

/// A decoded RGBA8 frame, row-major, 4 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PixelFrame {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width * height * 4) as usize);
        Self { width, height, data }
    }
}

/// Walks the RGBA buffer at a byte stride and keeps sufficiently opaque
/// pixels. A stride of 32 visits every 8th pixel.
pub fn sample_pixels(frame: &PixelFrame, stride_bytes: usize) -> Vec<Rgb> {
    let stride = stride_bytes.max(4);
    let data = &frame.data;
    let mut out = Vec::with_capacity(data.len() / stride + 1);

    let mut i = 0;
    while i + 3 < data.len() {
        if data[i + 3] >= MIN_ALPHA {
            out.push(Rgb::new(data[i], data[i + 1], data[i + 2]));
        }
        i += stride;
    }
    out
}
