use std::io::{Cursor, Write};

use engine_logging::{engine_debug, engine_info, engine_warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use seedvis_core::CaseCount;

use crate::filename::{archive_entry_name, archive_filename};
use crate::{ArchiveError, EngineHandle, GenerationError};

/// Receives packaging progress in percent.
pub trait ProgressSink {
    fn emit(&self, percent: f64);
}

impl<F: Fn(f64)> ProgressSink for F {
    fn emit(&self, percent: f64) {
        self(percent)
    }
}

/// One generated test case; lives only until it is written into the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCase {
    pub index: usize,
    pub seed: u64,
    pub text: String,
}

impl GeneratedCase {
    /// Case `index` of the batch starting at `base`. Seeds wrap at `u64::MAX`.
    pub fn generate(engine: &EngineHandle, base: u64, index: usize) -> Result<Self, GenerationError> {
        let seed = base.wrapping_add(index as u64);
        let text = engine.gen(seed)?;
        Ok(Self { index, seed, text })
    }
}

/// Finished in-memory archive, ready to hand to a download sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedArchive {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub entries: usize,
}

/// Generates `case_count` inputs starting at `seed` and packs them into one
/// zip archive, in strictly increasing seed order.
///
/// Nothing is returned unless every case was generated and written, so a
/// failure never leaves a partial archive behind. Entry timestamps are fixed,
/// which makes the bytes identical for identical arguments.
pub fn build_seed_archive(
    engine: &EngineHandle,
    seed: u64,
    case_count: CaseCount,
    progress: &dyn ProgressSink,
) -> Result<SeedArchive, ArchiveError> {
    let case_count = case_count.get() as usize;
    engine_info!("Building archive seed={} cases={}", seed, case_count);

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for index in 0..case_count {
        let case = GeneratedCase::generate(engine, seed, index).inspect_err(|err| {
            engine_warn!("Aborting archive at case {}: {}", index, err);
        })?;
        writer.start_file(archive_entry_name(case.index), options)?;
        writer.write_all(case.text.as_bytes())?;
        engine_debug!("Packed case {} (seed {})", case.index, case.seed);
        progress.emit((index + 1) as f64 * 100.0 / case_count as f64);
    }

    let bytes = writer.finish()?.into_inner();
    engine_info!("Archive complete: {} entries, {} bytes", case_count, bytes.len());
    Ok(SeedArchive {
        filename: archive_filename(seed),
        bytes,
        entries: case_count,
    })
}
