//! Seedvis engine: the generation engine contract and effect-side IO.
mod archive;
mod catalog;
mod contract;
mod download;
mod engine;
mod filename;
mod types;

pub use archive::{build_seed_archive, GeneratedCase, ProgressSink, SeedArchive};
pub use catalog::{CatalogError, OutputFile, OutputFileStore};
pub use contract::GenerationEngine;
pub use download::{ensure_download_dir, DirectoryDownloadSink, DownloadError, DownloadSink};
pub use engine::EngineHandle;
pub use filename::{archive_entry_name, archive_filename};
pub use types::{ArchiveError, EngineFault, EngineInitError, GenerationError, VisOutcome};
