//! ICO container assembly: structure builders and the sequential writer.

use alloc::vec::Vec;

use super::dib;
use super::{BITMAP_INFO_HEADER_SIZE, DIRECTORY_ENTRY_SIZE, FILE_HEADER_SIZE};
use crate::error::IcoError;
use crate::image::SourceImage;

/// Resource type tag for icon containers (cursors would be 2).
const ICON_TYPE: u16 = 1;
const COLOR_PLANES: u16 = 1;
const BITS_PER_PIXEL: u16 = 32;
/// BI_RGB: uncompressed pixel data.
const COMPRESSION_NONE: u32 = 0;
/// Largest dimension an icon entry can describe. Encodes as 0 in the
/// one-byte directory fields.
const MAX_DIMENSION: u32 = 256;

pub(crate) fn encode_ico(images: &[SourceImage]) -> Result<Vec<u8>, IcoError> {
    if images.is_empty() {
        return Err(IcoError::NoMatchingImages);
    }
    let count = u16::try_from(images.len()).map_err(|_| IcoError::TooManyImages {
        count: images.len(),
    })?;

    let directory_end = DIRECTORY_ENTRY_SIZE
        .checked_mul(images.len())
        .and_then(|d| d.checked_add(FILE_HEADER_SIZE))
        .ok_or(IcoError::TooManyImages {
            count: images.len(),
        })?;
    let mut total = directory_end;
    for image in images {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(IcoError::DimensionsTooLarge { width, height });
        }
        total = total
            .checked_add(BITMAP_INFO_HEADER_SIZE)
            .and_then(|t| t.checked_add(image.pixel_bytes()))
            .ok_or(IcoError::TooManyImages {
                count: images.len(),
            })?;
    }
    // Directory offsets are u32 fields; the whole container must fit.
    if u32::try_from(total).is_err() {
        return Err(IcoError::TooManyImages {
            count: images.len(),
        });
    }

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&file_header(count));

    // Directory pass: each offset accumulates every prior image's info
    // header and pixel payload. `total` fits in u32, so none of this can
    // overflow.
    let mut offset = directory_end as u32;
    for image in images {
        let pixel_bytes = image.pixel_bytes() as u32;
        out.extend_from_slice(&directory_entry(
            image.width(),
            image.height(),
            pixel_bytes,
            offset,
        ));
        offset += pixel_bytes + BITMAP_INFO_HEADER_SIZE as u32;
    }

    // Payload pass, in the same image order as the directory.
    for image in images {
        out.extend_from_slice(&bitmap_info_header(
            image.width(),
            image.height(),
            image.pixel_bytes() as u32,
        ));
        out.extend_from_slice(&dib::rgba_to_dib(image.pixels(), image.width()));
    }

    Ok(out)
}

/// ICONDIR: reserved, resource type, image count.
fn file_header(count: u16) -> [u8; FILE_HEADER_SIZE] {
    let mut header = [0u8; FILE_HEADER_SIZE];
    header[0..2].copy_from_slice(&0u16.to_le_bytes()); // reserved
    header[2..4].copy_from_slice(&ICON_TYPE.to_le_bytes());
    header[4..6].copy_from_slice(&count.to_le_bytes());
    header
}

/// ICONDIRENTRY for one image at the given absolute offset.
fn directory_entry(
    width: u32,
    height: u32,
    pixel_bytes: u32,
    offset: u32,
) -> [u8; DIRECTORY_ENTRY_SIZE] {
    let mut entry = [0u8; DIRECTORY_ENTRY_SIZE];
    entry[0] = dimension_byte(width);
    entry[1] = dimension_byte(height);
    // entry[2]: color count, 0 for true color; entry[3]: reserved
    entry[4..6].copy_from_slice(&COLOR_PLANES.to_le_bytes());
    entry[6..8].copy_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    entry[8..12].copy_from_slice(&(pixel_bytes + BITMAP_INFO_HEADER_SIZE as u32).to_le_bytes());
    entry[12..16].copy_from_slice(&offset.to_le_bytes());
    entry
}

/// One-byte dimension encoding: 256 is stored as 0.
fn dimension_byte(dim: u32) -> u8 {
    if dim >= MAX_DIMENSION { 0 } else { dim as u8 }
}

/// BITMAPINFOHEADER for one image's DIB pixel data.
fn bitmap_info_header(width: u32, height: u32, pixel_bytes: u32) -> [u8; BITMAP_INFO_HEADER_SIZE] {
    let mut header = [0u8; BITMAP_INFO_HEADER_SIZE];
    header[0..4].copy_from_slice(&(BITMAP_INFO_HEADER_SIZE as u32).to_le_bytes());
    header[4..8].copy_from_slice(&(width as i32).to_le_bytes());
    // Doubled height: readers expect the height to cover the XOR color mask
    // plus the legacy AND mask region, even though only color rows are
    // written here.
    header[8..12].copy_from_slice(&((height as i32) * 2).to_le_bytes());
    header[12..14].copy_from_slice(&COLOR_PLANES.to_le_bytes());
    header[14..16].copy_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    header[16..20].copy_from_slice(&COMPRESSION_NONE.to_le_bytes());
    header[20..24].copy_from_slice(&pixel_bytes.to_le_bytes());
    // Remaining fields (resolution, palette counts) stay zero.
    header
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_byte_encoding() {
        assert_eq!(dimension_byte(16), 16);
        assert_eq!(dimension_byte(255), 255);
        assert_eq!(dimension_byte(256), 0);
    }

    #[test]
    fn file_header_fields() {
        let header = file_header(3);
        assert_eq!(u16::from_le_bytes([header[0], header[1]]), 0);
        assert_eq!(u16::from_le_bytes([header[2], header[3]]), 1);
        assert_eq!(u16::from_le_bytes([header[4], header[5]]), 3);
    }

    #[test]
    fn directory_entry_fields() {
        let entry = directory_entry(32, 32, 4096, 54);
        assert_eq!(entry[0], 32);
        assert_eq!(entry[1], 32);
        assert_eq!(entry[2], 0); // color count
        assert_eq!(entry[3], 0); // reserved
        assert_eq!(u16::from_le_bytes([entry[4], entry[5]]), 1);
        assert_eq!(u16::from_le_bytes([entry[6], entry[7]]), 32);
        assert_eq!(
            u32::from_le_bytes([entry[8], entry[9], entry[10], entry[11]]),
            4096 + 40
        );
        assert_eq!(
            u32::from_le_bytes([entry[12], entry[13], entry[14], entry[15]]),
            54
        );
    }

    #[test]
    fn bitmap_info_header_doubles_height() {
        let header = bitmap_info_header(48, 48, 48 * 48 * 4);
        assert_eq!(
            i32::from_le_bytes([header[4], header[5], header[6], header[7]]),
            48
        );
        assert_eq!(
            i32::from_le_bytes([header[8], header[9], header[10], header[11]]),
            96
        );
    }
}
