use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use engine_logging::engine_info;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("download directory missing or not writable: {0}")]
    DownloadDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Destination of finished downloads.
pub trait DownloadSink: Send + Sync {
    /// Delivers `bytes` under `filename`; called once per successful archive.
    fn deliver(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, DownloadError>;
}

/// Ensure the download directory exists; create if missing.
pub fn ensure_download_dir(dir: &Path) -> Result<(), DownloadError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| DownloadError::DownloadDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(DownloadError::DownloadDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| DownloadError::DownloadDir(e.to_string()))?;
    }
    Ok(())
}

/// Saves downloads into a directory.
///
/// Each download is staged in a temp file (the transient handle) that is
/// renamed into place and released in the same call, so an interrupted
/// delivery never leaves a truncated archive under the final name.
pub struct DirectoryDownloadSink {
    dir: PathBuf,
}

impl DirectoryDownloadSink {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectoryDownloadSink {
    fn deliver(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, DownloadError> {
        ensure_download_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut handle = NamedTempFile::new_in(&self.dir)?;
        handle.write_all(bytes)?;
        handle.flush()?;
        handle.as_file_mut().sync_all()?;

        // Replaces a previous download of the same batch in one rename.
        handle.persist(&target).map_err(|e| DownloadError::Io(e.error))?;
        engine_info!("Delivered {} ({} bytes) to {:?}", filename, bytes.len(), target);
        Ok(target)
    }
}
