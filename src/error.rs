/// Errors from ICO container encoding and icon file generation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum IcoError {
    /// The size filter matched none of the source images. No output file
    /// is created in this case.
    #[error("no source images match the requested sizes")]
    NoMatchingImages,

    #[error("icon dimensions must be 1..=256, got {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("pixel buffer length mismatch: need {needed} bytes, got {actual}")]
    BufferSizeMismatch { needed: usize, actual: usize },

    #[error("too many images for one container: {count}")]
    TooManyImages { count: usize },

    /// The external decoder could not produce pixels for a source file.
    #[cfg(feature = "std")]
    #[error("cannot decode {}: {reason}", path.display())]
    Decode {
        path: std::path::PathBuf,
        reason: String,
    },

    /// The output sink failed. The destination file has already been
    /// removed by the time this error surfaces.
    #[cfg(feature = "std")]
    #[error("{stage} {}: {source}", path.display())]
    Sink {
        stage: SinkStage,
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}

/// Which sink operation failed.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SinkStage {
    Create,
    Write,
    Finalize,
}

#[cfg(feature = "std")]
impl core::fmt::Display for SinkStage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Create => "cannot create",
            Self::Write => "cannot write",
            Self::Finalize => "cannot finalize",
        })
    }
}
