//! Top-level icon generation: filter, decode, encode, write.

use std::path::{Path, PathBuf};

use log::info;

use crate::error::{IcoError, SinkStage};
use crate::ico;
use crate::image::SourceImage;
use crate::sink::OutputSink;

/// Output file name used when the caller supplies none.
pub const DEFAULT_NAME: &str = "app";

/// Icon sizes a Windows application is expected to ship.
pub const DEFAULT_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

/// Metadata for one candidate source file, known before decoding.
#[derive(Clone, Debug)]
pub struct SourceDescriptor {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl SourceDescriptor {
    pub fn new(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Decodes a source file into RGBA8 pixels.
///
/// Implementations wrap whatever image decoder the application uses. The
/// returned image's dimensions are trusted to match the descriptor that
/// named the file.
pub trait SourceDecoder {
    fn decode(&self, path: &Path) -> Result<SourceImage, IcoError>;
}

/// Retain descriptors whose dimensions match one of `sizes`.
///
/// Only square images are eligible; input order is preserved.
pub fn matching_sources<'a>(
    sources: &'a [SourceDescriptor],
    sizes: &[u32],
) -> Vec<&'a SourceDescriptor> {
    sources
        .iter()
        .filter(|s| s.width == s.height && sizes.contains(&s.width))
        .collect()
}

/// Builder for one icon generation run.
///
/// Defaults: output name [`DEFAULT_NAME`], target sizes [`DEFAULT_SIZES`].
/// Each run owns its buffers and destination; nothing is shared across
/// invocations.
#[derive(Clone, Debug)]
pub struct GenerateRequest<'a> {
    sources: &'a [SourceDescriptor],
    name: &'a str,
    sizes: &'a [u32],
}

impl<'a> GenerateRequest<'a> {
    pub fn new(sources: &'a [SourceDescriptor]) -> Self {
        Self {
            sources,
            name: DEFAULT_NAME,
            sizes: &DEFAULT_SIZES,
        }
    }

    /// Output file name, without extension. An empty name falls back to
    /// [`DEFAULT_NAME`].
    pub fn name(mut self, name: &'a str) -> Self {
        self.name = name;
        self
    }

    /// Target sizes to keep from the sources.
    pub fn sizes(mut self, sizes: &'a [u32]) -> Self {
        self.sizes = sizes;
        self
    }

    /// Generate `<out_dir>/<name>.ico` from the matching sources and return
    /// its absolute path.
    ///
    /// Fails with [`IcoError::NoMatchingImages`] before creating any file
    /// when no source matches the target sizes. Decode failures propagate
    /// before the destination is opened; once it is open, any failure
    /// removes the partially written file before the error returns.
    pub fn generate(&self, decoder: &dyn SourceDecoder, out_dir: &Path) -> Result<PathBuf, IcoError> {
        let matched = matching_sources(self.sources, self.sizes);
        if matched.is_empty() {
            return Err(IcoError::NoMatchingImages);
        }

        info!("generating icon from {} source images", matched.len());

        let mut images = Vec::with_capacity(matched.len());
        for source in &matched {
            images.push(decoder.decode(source.path())?);
        }

        let encoded = ico::encode(&images)?;

        let name = if self.name.is_empty() {
            DEFAULT_NAME
        } else {
            self.name
        };
        let dest = out_dir.join(format!("{name}.ico"));
        let dest = std::path::absolute(&dest).map_err(|source| IcoError::Sink {
            stage: SinkStage::Create,
            path: dest,
            source,
        })?;

        let mut sink = OutputSink::create(dest)?;
        sink.write_all(&encoded)?;
        let path = sink.finalize()?;

        info!("created: {}", path.display());
        Ok(path)
    }
}
