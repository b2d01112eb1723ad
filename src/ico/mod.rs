//! ICO container encoder.
//!
//! Container layout: a 6-byte file header, one 16-byte directory entry per
//! image, then for each image a 40-byte bitmap info header followed by its
//! bottom-up BGRA pixel data. Directory entries reference the info headers
//! by absolute byte offset, so the regions are assembled in a single
//! forward pass.

mod dib;
mod encode;

use alloc::vec::Vec;

use crate::error::IcoError;
use crate::image::SourceImage;

/// Byte size of the ICONDIR file header.
pub const FILE_HEADER_SIZE: usize = 6;
/// Byte size of one ICONDIRENTRY.
pub const DIRECTORY_ENTRY_SIZE: usize = 16;
/// Byte size of the BITMAPINFOHEADER preceding each image's pixels.
pub const BITMAP_INFO_HEADER_SIZE: usize = 40;

/// Encode images into a single ICO container.
///
/// Images are written in slice order, and that order is identical across
/// the directory and payload regions. Every dimension must be in 1..=256;
/// a 256-pixel dimension is stored as 0 in the one-byte directory fields.
///
/// The output is byte-for-byte reproducible for identical inputs.
pub fn encode(images: &[SourceImage]) -> Result<Vec<u8>, IcoError> {
    encode::encode_ico(images)
}
