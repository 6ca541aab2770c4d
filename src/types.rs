use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Entry {
    pub path: PathBuf,
    pub size: u64,
    pub is_dir: bool,
    pub modified: DateTime<Local>,
    /// Only ever flipped from false to true, by the selection pass.
    pub marked: bool,
}

impl Entry {
    #[must_use]
    pub fn new(path: PathBuf, size: u64, is_dir: bool, modified: DateTime<Local>) -> Self {
        Entry {
            path,
            size,
            is_dir,
            modified,
            marked: false,
        }
    }

    /// Base name for display; falls back to the full path for roots.
    #[must_use]
    pub fn name(&self) -> String {
        display_name(&self.path)
    }

    #[must_use]
    pub fn kind_label(&self) -> &'static str {
        if self.is_dir { "directory" } else { "file" }
    }
}

#[must_use]
pub fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.to_string_lossy().to_string(),
        |name| name.to_string_lossy().to_string(),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One aggregate question covering the whole listing.
    Bulk,
    /// One question per entry.
    Interactive,
}

impl Mode {
    #[must_use]
    pub fn from_all_flag(all: bool) -> Self {
        if all { Mode::Bulk } else { Mode::Interactive }
    }
}
