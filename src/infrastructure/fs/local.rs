//! Local Asset Store
//!
//! Implements the AssetStore port for local disk.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::entities::{Artifact, Asset};
use crate::domain::ports::AssetStore;
use crate::domain::value_objects::{ExtensionSet, IgnorePatterns};
use crate::error::{AssetgzError, AssetgzResult};

/// Local disk implementation of [`AssetStore`].
///
/// Artifacts are written through a temp file in the same directory and
/// renamed into place unless atomic writes are disabled.
#[derive(Debug, Clone, Copy)]
pub struct LocalAssetStore {
    atomic_writes: bool,
}

impl Default for LocalAssetStore {
    fn default() -> Self {
        Self {
            atomic_writes: true,
        }
    }
}

impl LocalAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_atomic_writes(mut self, atomic_writes: bool) -> Self {
        self.atomic_writes = atomic_writes;
        self
    }

    pub fn atomic_writes(&self) -> bool {
        self.atomic_writes
    }
}

impl AssetStore for LocalAssetStore {
    fn root_exists(&self, root: &Path) -> bool {
        root.is_dir()
    }

    fn discover(&self, root: &Path, extensions: &ExtensionSet) -> AssetgzResult<Vec<Asset>> {
        let ignore = IgnorePatterns::load(root)?;
        if !ignore.is_empty() {
            tracing::debug!(patterns = ignore.pattern_count(), "loaded ignore patterns");
        }

        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        if !ignore.is_empty() {
            let walk_root = root.to_path_buf();
            builder.filter_entry(move |entry| {
                let rel = entry.path().strip_prefix(&walk_root).unwrap_or(entry.path());
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !ignore.is_ignored(rel, is_dir)
            });
        }

        let mut assets = Vec::new();
        for entry in builder.build() {
            let entry = entry.map_err(|e| AssetgzError::Walk {
                path: root.to_path_buf(),
                message: e.to_string(),
            })?;

            let path = entry.path();
            if entry.depth() == 0 || !extensions.matches(path) {
                continue;
            }

            // Follows symlinks; dangling links are not files.
            let metadata = match fs::metadata(path) {
                Ok(m) => m,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(AssetgzError::metadata(path, e)),
            };
            if !metadata.is_file() {
                continue;
            }

            let modified = metadata
                .modified()
                .map_err(|e| AssetgzError::metadata(path, e))?;
            assets.push(Asset::new(path, metadata.len(), modified));
        }

        tracing::debug!(root = %root.display(), count = assets.len(), "discovered assets");
        Ok(assets)
    }

    fn artifact(&self, path: &Path) -> AssetgzResult<Option<Artifact>> {
        match fs::metadata(path) {
            Ok(metadata) => {
                let modified = metadata
                    .modified()
                    .map_err(|e| AssetgzError::metadata(path, e))?;
                Ok(Some(Artifact {
                    path: path.to_path_buf(),
                    size: metadata.len(),
                    modified,
                }))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AssetgzError::metadata(path, e)),
        }
    }

    fn read(&self, path: &Path) -> AssetgzResult<Vec<u8>> {
        fs::read(path).map_err(|e| AssetgzError::read(path, e))
    }

    fn write_artifact(&self, path: &Path, content: &[u8]) -> AssetgzResult<Artifact> {
        if self.atomic_writes {
            atomic_write(path, content).map_err(|e| AssetgzError::write(path, e))?;
        } else {
            fs::write(path, content).map_err(|e| AssetgzError::write(path, e))?;
        }

        self.artifact(path)?.ok_or_else(|| {
            AssetgzError::write(
                path,
                io::Error::new(io::ErrorKind::NotFound, "artifact vanished after write"),
            )
        })
    }

    fn remove(&self, path: &Path) -> AssetgzResult<()> {
        fs::remove_file(path).map_err(|source| AssetgzError::Remove {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Write `content` to `path` via a sibling temp file and rename.
///
/// The result gets the same mode `fs::write` would give it: an existing
/// artifact keeps its mode, a new one gets the umask default.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Masked by the process umask, like a plain create.
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(&dir)?;
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file().set_permissions(existing.permissions())?;
    }
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn discover_walks_recursively_and_filters_extensions() {
        let dir = tempdir().unwrap();
        write(dir.path(), "index.html", "<html></html>");
        write(dir.path(), "css/site.css", "body {}");
        write(dir.path(), "img/logo.png", "png");
        write(dir.path(), "js/app.js.gz", "old");

        let store = LocalAssetStore::new();
        let assets = store
            .discover(dir.path(), &ExtensionSet::default())
            .unwrap();

        let rel: Vec<PathBuf> = assets
            .iter()
            .map(|a| a.path().strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            rel,
            vec![PathBuf::from("css/site.css"), PathBuf::from("index.html")]
        );
        assert_eq!(assets[0].size(), 7);
    }

    #[test]
    fn discover_includes_hidden_files() {
        let dir = tempdir().unwrap();
        write(dir.path(), ".well-known/config.json", "{}");

        let assets = LocalAssetStore::new()
            .discover(dir.path(), &ExtensionSet::default())
            .unwrap();
        assert_eq!(assets.len(), 1);
    }

    #[test]
    fn discover_prunes_ignored_directories() {
        let dir = tempdir().unwrap();
        write(dir.path(), "app.js", "a");
        write(dir.path(), "vendor/lib.js", "b");
        write(dir.path(), ".assetgzignore", "vendor/\n");

        let assets = LocalAssetStore::new()
            .discover(dir.path(), &ExtensionSet::default())
            .unwrap();
        assert_eq!(assets.len(), 1);
        assert!(assets[0].path().ends_with("app.js"));
    }

    #[test]
    fn discover_skips_directories_named_like_assets() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("weird.js")).unwrap();

        let assets = LocalAssetStore::new()
            .discover(dir.path(), &ExtensionSet::default())
            .unwrap();
        assert!(assets.is_empty());
    }

    #[test]
    fn artifact_missing_is_none() {
        let dir = tempdir().unwrap();
        let store = LocalAssetStore::new();
        assert!(store.artifact(&dir.path().join("nope.gz")).unwrap().is_none());
    }

    #[test]
    fn write_artifact_overwrites_and_stats() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.js.gz");
        fs::write(&path, "previous content that is longer").unwrap();

        let store = LocalAssetStore::new();
        let artifact = store.write_artifact(&path, b"new").unwrap();

        assert_eq!(artifact.size, 3);
        assert_eq!(fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn write_artifact_in_place_when_not_atomic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.js.gz");

        let store = LocalAssetStore::new().with_atomic_writes(false);
        store.write_artifact(&path, b"abc").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"abc");
    }

    #[test]
    fn write_artifact_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("site.css.gz");

        LocalAssetStore::new().write_artifact(&path, b"x").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("site.css.gz")]);
    }

    #[cfg(unix)]
    fn mode(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn atomic_and_in_place_writes_give_the_same_mode() {
        let dir = tempdir().unwrap();
        let atomic = dir.path().join("a.js.gz");
        let in_place = dir.path().join("b.js.gz");

        LocalAssetStore::new().write_artifact(&atomic, b"x").unwrap();
        LocalAssetStore::new()
            .with_atomic_writes(false)
            .write_artifact(&in_place, b"x")
            .unwrap();

        assert_eq!(mode(&atomic), mode(&in_place));
    }

    #[cfg(unix)]
    #[test]
    fn atomic_write_keeps_existing_artifact_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = write(dir.path(), "site.css.gz", "old");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        LocalAssetStore::new().write_artifact(&path, b"new").unwrap();

        assert_eq!(mode(&path), 0o640);
        assert_eq!(fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn write_artifact_into_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing/app.js.gz");

        let err = LocalAssetStore::new().write_artifact(&path, b"x").unwrap_err();
        assert!(matches!(err, AssetgzError::Write { .. }));
    }

    #[test]
    fn artifact_reports_mtime() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "a.gz", "x");
        let when = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        fs::File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(when)
            .unwrap();

        let artifact = LocalAssetStore::new().artifact(&path).unwrap().unwrap();
        assert_eq!(artifact.modified, when);
    }

    #[test]
    fn remove_deletes_file() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "a.js.gz", "x");

        LocalAssetStore::new().remove(&path).unwrap();
        assert!(!path.exists());
    }
}
