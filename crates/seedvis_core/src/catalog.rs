use std::sync::LazyLock;

use regex::Regex;

static SEED_FILENAME: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:.*_)?(\d+)\.[^.]+$").ok());

/// Seed embedded in an output filename: `1234.txt` and `abcd_1234.txt` both
/// yield 1234. Names that do not follow the pattern, or whose digits overflow
/// `u64`, carry no seed.
pub fn seed_from_filename(name: &str) -> Option<u64> {
    let re = SEED_FILENAME.as_ref()?;
    let caps = re.captures(name)?;
    caps.get(1)?.as_str().parse().ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub seed: Option<u64>,
}

/// Sorted list of output files from the last directory selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogState {
    entries: Vec<CatalogEntry>,
    selected: Option<usize>,
}

impl CatalogState {
    /// Replaces the whole collection. Names are sorted by codepoint so the
    /// order never depends on how the platform listed the directory.
    pub(crate) fn ingest(&mut self, mut names: Vec<String>) {
        names.sort();
        self.entries = names
            .into_iter()
            .map(|name| CatalogEntry {
                seed: seed_from_filename(&name),
                name,
            })
            .collect();
        self.selected = None;
    }

    pub(crate) fn select(&mut self, index: usize) -> Option<&CatalogEntry> {
        if index >= self.entries.len() {
            return None;
        }
        self.selected = Some(index);
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&CatalogEntry> {
        self.selected.and_then(|index| self.entries.get(index))
    }

    pub fn selection_enabled(&self) -> bool {
        !self.entries.is_empty()
    }
}
