use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use engine_logging::{engine_debug, engine_info, engine_warn};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no output file at index {index}")]
    NotFound { index: usize },
    #[error("catalog entry {index} is {actual}, expected {expected}")]
    NameMismatch {
        index: usize,
        expected: String,
        actual: String,
    },
    #[error("cannot list {path:?}: {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
    #[error("io error reading {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

/// One selectable output file. Content stays on disk until selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub name: String,
    pub path: PathBuf,
}

/// Files from the last directory selection, sorted by name.
///
/// The store only keeps paths; [`OutputFileStore::load`] reads the content of
/// the one file the user picked.
#[derive(Debug, Clone, Default)]
pub struct OutputFileStore {
    files: Vec<OutputFile>,
}

impl OutputFileStore {
    /// Collects every regular file below `dir`, like a browser directory
    /// picker does. Names are base names; paths keep the full location.
    ///
    /// An unreadable `dir` is an error. Entries below it that cannot be read
    /// are logged and skipped.
    pub fn from_dir(dir: &Path) -> Result<Self, CatalogError> {
        let mut paths = Vec::new();
        for entry in WalkDir::new(dir).sort_by_file_name() {
            match entry {
                Ok(entry) if entry.file_type().is_file() => paths.push(entry.into_path()),
                Ok(_) => {}
                Err(source) if source.depth() == 0 => {
                    return Err(CatalogError::Walk {
                        path: dir.to_path_buf(),
                        source,
                    });
                }
                Err(err) => engine_warn!("Skipping unreadable entry below {:?}: {}", dir, err),
            }
        }
        let store = Self::from_paths(paths);
        engine_info!("Ingested {} output files from {:?}", store.len(), dir);
        Ok(store)
    }

    pub fn from_paths(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut files: Vec<OutputFile> = paths
            .into_iter()
            .filter_map(|path| {
                let name = path.file_name()?.to_string_lossy().into_owned();
                Some(OutputFile { name, path })
            })
            .collect();
        files.sort_by(|a, b| a.name.cmp(&b.name));
        Self { files }
    }

    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(|file| file.name.clone()).collect()
    }

    pub fn files(&self) -> &[OutputFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Reads entry `index`; `name` guards against a catalog that changed
    /// between selection and load.
    pub fn load(&self, index: usize, name: &str) -> Result<String, CatalogError> {
        let file = self
            .files
            .get(index)
            .ok_or(CatalogError::NotFound { index })?;
        if file.name != name {
            return Err(CatalogError::NameMismatch {
                index,
                expected: name.to_string(),
                actual: file.name.clone(),
            });
        }
        let content = fs::read_to_string(&file.path).map_err(|source| CatalogError::Io {
            path: file.path.clone(),
            source,
        })?;
        engine_debug!("Loaded {} ({} bytes)", file.name, content.len());
        Ok(content)
    }
}
