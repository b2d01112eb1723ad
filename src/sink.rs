//! File output with all-or-nothing cleanup.

use std::fs::{self, File};
use std::io::Write;
use std::mem;
use std::path::{Path, PathBuf};

use crate::error::{IcoError, SinkStage};

/// Append-only writer over a destination file.
///
/// The destination either ends up fully written and synced (after
/// [`finalize`](OutputSink::finalize)) or is removed: dropping the sink
/// before finalizing deletes the file, as does a finalize failure.
#[derive(Debug)]
pub struct OutputSink {
    file: File,
    guard: RemoveGuard,
}

/// Removes the destination on drop until disarmed by a successful finalize.
///
/// Declared after `file` in [`OutputSink`] so the file handle is closed
/// before removal runs.
#[derive(Debug)]
struct RemoveGuard {
    path: PathBuf,
    armed: bool,
}

impl Drop for RemoveGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

impl OutputSink {
    /// Create the destination file for writing.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, IcoError> {
        let path = path.into();
        match File::create(&path) {
            Ok(file) => Ok(Self {
                file,
                guard: RemoveGuard { path, armed: true },
            }),
            Err(source) => Err(IcoError::Sink {
                stage: SinkStage::Create,
                path,
                source,
            }),
        }
    }

    /// Destination path.
    pub fn path(&self) -> &Path {
        &self.guard.path
    }

    /// Append bytes to the destination.
    pub fn write_all(&mut self, bytes: &[u8]) -> Result<(), IcoError> {
        self.file.write_all(bytes).map_err(|source| IcoError::Sink {
            stage: SinkStage::Write,
            path: self.guard.path.clone(),
            source,
        })
    }

    /// Flush and sync the destination, keeping it in place.
    ///
    /// On failure the partially written file is removed before the error
    /// returns.
    pub fn finalize(mut self) -> Result<PathBuf, IcoError> {
        match self.file.flush().and_then(|()| self.file.sync_all()) {
            Ok(()) => {
                self.guard.armed = false;
                Ok(mem::take(&mut self.guard.path))
            }
            Err(source) => Err(IcoError::Sink {
                stage: SinkStage::Finalize,
                path: self.guard.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalize_keeps_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let dest = dir.path().join("out.ico");

        let mut sink = OutputSink::create(&dest).expect("create");
        sink.write_all(b"abc").expect("write");
        sink.write_all(b"def").expect("write");
        let path = sink.finalize().expect("finalize");

        assert_eq!(path, dest);
        assert_eq!(fs::read(&dest).expect("read"), b"abcdef");
    }

    #[test]
    fn drop_without_finalize_removes_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let dest = dir.path().join("out.ico");

        let mut sink = OutputSink::create(&dest).expect("create");
        sink.write_all(b"partial").expect("write");
        assert!(dest.exists());
        drop(sink);

        assert!(!dest.exists(), "dropped sink must remove its file");
    }

    #[test]
    fn create_failure_reports_stage() {
        let dir = tempfile::tempdir().expect("temp dir");
        let dest = dir.path().join("missing-subdir").join("out.ico");

        let err = OutputSink::create(&dest).expect_err("create must fail");
        match err {
            IcoError::Sink { stage, path, .. } => {
                assert_eq!(stage, SinkStage::Create);
                assert_eq!(path, dest);
            }
            other => panic!("expected Sink error, got {other:?}"),
        }
    }
}
