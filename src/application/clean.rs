//! Clean Use Case
//!
//! Removes the artifacts of eligible assets. Artifacts without a source are
//! left alone since they may have been added by hand.

use std::path::{Path, PathBuf};

use crate::domain::ports::AssetStore;
use crate::domain::value_objects::ExtensionSet;
use crate::error::AssetgzResult;

/// Options for the clean command
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    pub extensions: ExtensionSet,
    /// List what would be removed without deleting
    pub dry_run: bool,
}

/// Result of a clean operation
#[derive(Debug, Clone, Default)]
pub struct CleanReport {
    pub root: PathBuf,
    pub root_missing: bool,
    pub dry_run: bool,
    /// Artifacts removed (or that would be, in dry run)
    pub removed: Vec<PathBuf>,
}

/// Clean use case - removes generated artifacts
pub struct CleanUseCase<S: AssetStore> {
    store: S,
}

impl<S: AssetStore> CleanUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn execute(&self, root: &Path, options: &CleanOptions) -> AssetgzResult<CleanReport> {
        let mut report = CleanReport {
            root: root.to_path_buf(),
            dry_run: options.dry_run,
            ..CleanReport::default()
        };

        if !self.store.root_exists(root) {
            tracing::info!(root = %root.display(), "asset root not found, nothing to clean");
            report.root_missing = true;
            return Ok(report);
        }

        for asset in self.store.discover(root, &options.extensions)? {
            let artifact = asset.artifact_path();
            if self.store.artifact(&artifact)?.is_none() {
                continue;
            }

            if !options.dry_run {
                self.store.remove(&artifact)?;
                tracing::debug!(path = %artifact.display(), "removed artifact");
            }
            report.removed.push(artifact);
        }

        Ok(report)
    }
}
