//! Compress options

use crate::domain::value_objects::ExtensionSet;

/// Options for a compression pass
#[derive(Debug, Clone, Default)]
pub struct CompressOptions {
    /// Extensions eligible for compression
    pub extensions: ExtensionSet,
    /// Regenerate artifacts even when they are current
    pub force: bool,
    /// Report what would be compressed without writing artifacts
    pub dry_run: bool,
}

impl CompressOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extensions(mut self, extensions: ExtensionSet) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
