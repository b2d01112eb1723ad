//! Top-down RGBA to bottom-up BGRA DIB pixel conversion.

use alloc::vec::Vec;

use crate::image::RGBA_BYTES_PER_PIXEL;

/// Convert a top-down RGBA8 buffer into the bottom-up BGRA order DIB pixel
/// data uses.
///
/// The output has the same length as the input; only row order and channel
/// order change. Callers guarantee `pixels.len() == width * height * 4` and
/// `width > 0` ([`crate::SourceImage`] construction plus the encoder's
/// dimension check enforce both).
pub(crate) fn rgba_to_dib(pixels: &[u8], width: u32) -> Vec<u8> {
    let row_bytes = width as usize * RGBA_BYTES_PER_PIXEL;
    let mut out = Vec::with_capacity(pixels.len());
    for row in pixels.chunks_exact(row_bytes).rev() {
        for px in row.chunks_exact(RGBA_BYTES_PER_PIXEL) {
            out.push(px[2]);
            out.push(px[1]);
            out.push(px[0]);
            out.push(px[3]);
        }
    }
    out
}
