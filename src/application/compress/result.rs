//! Compress result types

use std::path::{Path, PathBuf};

use crate::domain::value_objects::Savings;

/// One asset whose artifact was (re)written
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedFile {
    pub source: PathBuf,
    pub artifact: PathBuf,
    pub savings: Savings,
}

/// Result of a compression pass
#[derive(Debug, Clone, Default)]
pub struct CompressReport {
    /// Asset root that was scanned
    pub root: PathBuf,
    /// Root did not exist; nothing was done
    pub root_missing: bool,
    /// Nothing was written
    pub dry_run: bool,
    /// Assets compressed (or that would be, in dry run)
    pub compressed: Vec<CompressedFile>,
    /// Assets whose artifact was already current
    pub current: Vec<PathBuf>,
}

impl CompressReport {
    pub fn new(root: &Path, dry_run: bool) -> Self {
        Self {
            root: root.to_path_buf(),
            dry_run,
            ..Self::default()
        }
    }

    /// Sum of bytes saved over all compressed files
    pub fn total_saved(&self) -> i64 {
        self.compressed.iter().map(|f| f.savings.saved()).sum()
    }

    /// True when no artifact was (or would be) written
    pub fn is_empty(&self) -> bool {
        self.compressed.is_empty()
    }

    /// Number of eligible assets seen
    pub fn total_count(&self) -> usize {
        self.compressed.len() + self.current.len()
    }
}
