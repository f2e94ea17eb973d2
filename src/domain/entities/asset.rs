//! Asset and artifact entities
//!
//! An asset is a static web file under the asset root. Its artifact is the
//! gzip sibling written next to it (`app.js` -> `app.js.gz`).

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Extension appended to an asset path to form its artifact path.
pub const ARTIFACT_EXTENSION: &str = "gz";

/// Derive the artifact path for a source asset.
///
/// The suffix is appended, never substituted: `index.html` becomes
/// `index.html.gz`, which is what the device web server looks for.
pub fn artifact_path_for(source: &Path) -> PathBuf {
    let mut name = OsString::from(source.as_os_str());
    name.push(".");
    name.push(ARTIFACT_EXTENSION);
    PathBuf::from(name)
}

/// A source file eligible for compression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    path: PathBuf,
    size: u64,
    modified: SystemTime,
}

impl Asset {
    pub fn new(path: impl Into<PathBuf>, size: u64, modified: SystemTime) -> Self {
        Self {
            path: path.into(),
            size,
            modified,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    /// Path of the compressed sibling
    pub fn artifact_path(&self) -> PathBuf {
        artifact_path_for(&self.path)
    }

    /// File name for display (falls back to the full path)
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// A compressed artifact on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub size: u64,
    pub modified: SystemTime,
}
