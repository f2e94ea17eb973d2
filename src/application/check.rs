//! Check Use Case
//!
//! Read-only status of every artifact under the asset root. Optionally
//! decompresses current artifacts and compares them with their source.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::ports::{AssetStore, Codec};
use crate::domain::value_objects::{ExtensionSet, Freshness};
use crate::error::AssetgzResult;

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub extensions: ExtensionSet,
    /// Decompress current artifacts and compare bytes with the source
    pub verify: bool,
}

/// Status of one asset's artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactStatus {
    Current,
    Stale,
    Missing,
    /// Current by timestamp but does not decompress to the source bytes
    Corrupt,
}

impl ArtifactStatus {
    pub fn is_ok(self) -> bool {
        matches!(self, ArtifactStatus::Current)
    }
}

impl From<Freshness> for ArtifactStatus {
    fn from(freshness: Freshness) -> Self {
        match freshness {
            Freshness::Current => ArtifactStatus::Current,
            Freshness::Stale => ArtifactStatus::Stale,
            Freshness::Missing => ArtifactStatus::Missing,
        }
    }
}

impl fmt::Display for ArtifactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactStatus::Current => write!(f, "current"),
            ArtifactStatus::Stale => write!(f, "stale"),
            ArtifactStatus::Missing => write!(f, "missing"),
            ArtifactStatus::Corrupt => write!(f, "corrupt"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEntry {
    pub source: PathBuf,
    pub artifact: PathBuf,
    pub status: ArtifactStatus,
}

#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub root: PathBuf,
    pub root_missing: bool,
    pub verified: bool,
    pub entries: Vec<CheckEntry>,
}

impl CheckReport {
    pub fn count(&self, status: ArtifactStatus) -> usize {
        self.entries.iter().filter(|e| e.status == status).count()
    }

    /// Every artifact is current (and verified, if requested)
    pub fn is_clean(&self) -> bool {
        self.entries.iter().all(|e| e.status.is_ok())
    }

    pub fn problems(&self) -> impl Iterator<Item = &CheckEntry> {
        self.entries.iter().filter(|e| !e.status.is_ok())
    }
}

pub struct CheckUseCase<S, C>
where
    S: AssetStore,
    C: Codec,
{
    store: S,
    codec: C,
}

impl<S, C> CheckUseCase<S, C>
where
    S: AssetStore,
    C: Codec,
{
    pub fn new(store: S, codec: C) -> Self {
        Self { store, codec }
    }

    pub fn execute(&self, root: &Path, options: &CheckOptions) -> AssetgzResult<CheckReport> {
        let mut report = CheckReport {
            root: root.to_path_buf(),
            verified: options.verify,
            ..CheckReport::default()
        };

        if !self.store.root_exists(root) {
            tracing::info!(root = %root.display(), "asset root not found, nothing to check");
            report.root_missing = true;
            return Ok(report);
        }

        for asset in self.store.discover(root, &options.extensions)? {
            let artifact = asset.artifact_path();
            let existing = self.store.artifact(&artifact)?;
            let mut status: ArtifactStatus =
                Freshness::evaluate(asset.modified(), existing.map(|a| a.modified)).into();

            if options.verify
                && status == ArtifactStatus::Current
                && !self.round_trips(asset.path(), &artifact)?
            {
                status = ArtifactStatus::Corrupt;
            }

            tracing::debug!(path = %asset.path().display(), %status, "checked artifact");
            report.entries.push(CheckEntry {
                source: asset.path().to_path_buf(),
                artifact,
                status,
            });
        }

        Ok(report)
    }

    /// Decode `artifact` and compare with `source`. Undecodable counts as a mismatch.
    fn round_trips(&self, source: &Path, artifact: &Path) -> AssetgzResult<bool> {
        let compressed = self.store.read(artifact)?;
        let decoded = match self.codec.decode(&compressed) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(path = %artifact.display(), error = %e, "artifact does not decode");
                return Ok(false);
            }
        };
        Ok(decoded == self.store.read(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{GzipCodec, LocalAssetStore};
    use std::fs;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    fn check_use_case() -> CheckUseCase<LocalAssetStore, GzipCodec> {
        CheckUseCase::new(LocalAssetStore::new(), GzipCodec::default())
    }

    fn write_with_mtime(path: &Path, content: &[u8], when: SystemTime) {
        fs::write(path, content).unwrap();
        fs::File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(when)
            .unwrap();
    }

    #[test]
    fn reports_each_status() {
        let dir = tempdir().unwrap();
        let old = SystemTime::now() - Duration::from_secs(3600);
        let newer = old + Duration::from_secs(60);
        let codec = GzipCodec::default();

        write_with_mtime(&dir.path().join("a.html"), b"a", old);
        write_with_mtime(&dir.path().join("a.html.gz"), &codec.encode(b"a").unwrap(), newer);

        write_with_mtime(&dir.path().join("b.css"), b"b", newer);
        write_with_mtime(&dir.path().join("b.css.gz"), &codec.encode(b"b").unwrap(), old);

        write_with_mtime(&dir.path().join("c.js"), b"c", old);

        let report = check_use_case()
            .execute(dir.path(), &CheckOptions::default())
            .unwrap();

        let statuses: Vec<_> = report.entries.iter().map(|e| e.status).collect();
        assert_eq!(
            statuses,
            vec![
                ArtifactStatus::Current,
                ArtifactStatus::Stale,
                ArtifactStatus::Missing
            ]
        );
        assert!(!report.is_clean());
        assert_eq!(report.problems().count(), 2);
    }

    #[test]
    fn verify_flags_mismatched_artifact() {
        let dir = tempdir().unwrap();
        let old = SystemTime::now() - Duration::from_secs(3600);
        let newer = old + Duration::from_secs(60);
        let codec = GzipCodec::default();

        write_with_mtime(&dir.path().join("app.js"), b"new code", old);
        write_with_mtime(
            &dir.path().join("app.js.gz"),
            &codec.encode(b"old code").unwrap(),
            newer,
        );
        write_with_mtime(&dir.path().join("site.css"), b"css", old);
        write_with_mtime(&dir.path().join("site.css.gz"), b"not gzip", newer);

        let plain = check_use_case()
            .execute(dir.path(), &CheckOptions::default())
            .unwrap();
        assert!(plain.is_clean());

        let verified = check_use_case()
            .execute(
                dir.path(),
                &CheckOptions {
                    verify: true,
                    ..CheckOptions::default()
                },
            )
            .unwrap();
        assert_eq!(verified.count(ArtifactStatus::Corrupt), 2);
        assert!(!verified.is_clean());
    }

    #[test]
    fn missing_root_is_clean() {
        let dir = tempdir().unwrap();
        let report = check_use_case()
            .execute(&dir.path().join("data"), &CheckOptions::default())
            .unwrap();
        assert!(report.root_missing);
        assert!(report.is_clean());
    }
}
