//! # zenico
//!
//! Windows ICO container encoder for 32-bit RGBA images.
//!
//! The crate covers the binary encoding layer of icon generation: converting
//! top-down RGBA pixel buffers into the bottom-up BGRA DIB layout the ICO
//! format requires, and assembling the container's three regions (file
//! header, directory entries, per-image bitmap headers + pixels) with
//! byte-exact offsets.
//!
//! Image decoding stays outside the crate: callers hand in already-decoded
//! RGBA buffers, either directly to [`ico::encode`] for the raw container
//! bytes, or through a [`SourceDecoder`] when using the file-producing
//! [`GenerateRequest`] surface.
//!
//! ## Non-Goals
//!
//! - Source pixel formats other than RGBA8
//! - PNG-compressed icon entries
//! - Cursor files (hotspots) and palette/indexed images
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use zenico::{GenerateRequest, IcoError, SourceDecoder, SourceDescriptor, SourceImage};
//!
//! struct PngDecoder;
//!
//! impl SourceDecoder for PngDecoder {
//!     fn decode(&self, path: &Path) -> Result<SourceImage, IcoError> {
//!         // hand off to your PNG decoder of choice
//!         # let (width, height, pixels) = (16u32, 16u32, vec![0u8; 16 * 16 * 4]);
//!         SourceImage::new(width, height, pixels)
//!     }
//! }
//!
//! let sources = vec![
//!     SourceDescriptor::new("icons/app-16.png", 16, 16),
//!     SourceDescriptor::new("icons/app-32.png", 32, 32),
//! ];
//!
//! let path = GenerateRequest::new(&sources)
//!     .name("app")
//!     .generate(&PngDecoder, Path::new("build"))?;
//! println!("created {}", path.display());
//! # Ok::<(), zenico::IcoError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod image;

pub mod ico;

#[cfg(feature = "std")]
mod generate;
#[cfg(feature = "std")]
mod sink;

// Re-exports
pub use error::IcoError;
#[cfg(feature = "std")]
pub use error::SinkStage;
#[cfg(feature = "std")]
pub use generate::{
    DEFAULT_NAME, DEFAULT_SIZES, GenerateRequest, SourceDecoder, SourceDescriptor,
    matching_sources,
};
pub use image::SourceImage;
#[cfg(feature = "std")]
pub use sink::OutputSink;
