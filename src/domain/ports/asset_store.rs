//! AssetStore port - abstraction over the asset tree on disk
//!
//! Lets the use cases discover assets and read/write artifacts without
//! depending on a concrete file system.

use std::path::Path;

use crate::domain::entities::{Artifact, Asset};
use crate::domain::value_objects::ExtensionSet;
use crate::error::AssetgzResult;

/// Storage for source assets and their artifacts
///
/// Implementations:
/// - `LocalAssetStore` - local disk
pub trait AssetStore {
    /// Check whether the asset root exists and is a directory
    fn root_exists(&self, root: &Path) -> bool;

    /// Recursively list every regular file under `root` whose extension is
    /// in `extensions`, honouring the root's `.assetgzignore`.
    ///
    /// Returned paths include `root` as prefix and are sorted.
    fn discover(&self, root: &Path, extensions: &ExtensionSet) -> AssetgzResult<Vec<Asset>>;

    /// Stat an artifact. `Ok(None)` when it does not exist.
    fn artifact(&self, path: &Path) -> AssetgzResult<Option<Artifact>>;

    /// Read a whole file
    fn read(&self, path: &Path) -> AssetgzResult<Vec<u8>>;

    /// Write an artifact, replacing any previous content, and stat the result
    fn write_artifact(&self, path: &Path, content: &[u8]) -> AssetgzResult<Artifact>;

    /// Remove an artifact
    fn remove(&self, path: &Path) -> AssetgzResult<()>;
}
