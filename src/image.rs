use alloc::vec::Vec;

use crate::error::IcoError;

/// Bytes per pixel for the RGBA8 source layout.
pub(crate) const RGBA_BYTES_PER_PIXEL: usize = 4;

/// A decoded source image: RGBA8 interleaved, row-major, top-down.
///
/// Construction validates that the buffer holds exactly
/// `width * height * 4` bytes; the pixels are immutable afterwards.
#[derive(Clone, Debug)]
pub struct SourceImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl SourceImage {
    /// Wrap a decoded RGBA8 buffer.
    ///
    /// Returns [`IcoError::BufferSizeMismatch`] if `pixels` is not exactly
    /// `width * height * 4` bytes long.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, IcoError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|wh| wh.checked_mul(RGBA_BYTES_PER_PIXEL))
            .ok_or(IcoError::DimensionsTooLarge { width, height })?;
        if pixels.len() != expected {
            return Err(IcoError::BufferSizeMismatch {
                needed: expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel data, `width * height * 4` bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    pub(crate) fn pixel_bytes(&self) -> usize {
        self.pixels.len()
    }
}
