//! Compress Use Case
//!
//! Walks the asset root once, sequentially, and brings every artifact up to
//! date. Any I/O failure aborts the pass.

use std::path::Path;

use crate::domain::entities::Asset;
use crate::domain::ports::{AssetStore, Codec, CompressEvent, CompressEventSink};
use crate::domain::value_objects::{Freshness, Savings};
use crate::error::AssetgzResult;

use super::options::CompressOptions;
use super::result::{CompressReport, CompressedFile};

/// Compress use case - writes gzip artifacts next to stale assets
pub struct CompressUseCase<S, C>
where
    S: AssetStore,
    C: Codec,
{
    store: S,
    codec: C,
}

impl<S, C> CompressUseCase<S, C>
where
    S: AssetStore,
    C: Codec,
{
    pub fn new(store: S, codec: C) -> Self {
        Self { store, codec }
    }

    /// Run one pass over `root`.
    ///
    /// A missing root is reported through the sink and yields an empty
    /// report with `root_missing` set; it is not an error.
    pub fn execute(
        &self,
        root: &Path,
        options: &CompressOptions,
        sink: &dyn CompressEventSink,
    ) -> AssetgzResult<CompressReport> {
        let mut report = CompressReport::new(root, options.dry_run);

        if !self.store.root_exists(root) {
            tracing::info!(root = %root.display(), "asset root not found, skipping compression");
            report.root_missing = true;
            sink.on_event(&CompressEvent::RootMissing {
                root: root.to_path_buf(),
            });
            return Ok(report);
        }

        let assets = self.store.discover(root, &options.extensions)?;
        tracing::info!(
            root = %root.display(),
            assets = assets.len(),
            codec = self.codec.name(),
            force = options.force,
            dry_run = options.dry_run,
            "compression pass started"
        );
        sink.on_event(&CompressEvent::Started {
            root: root.to_path_buf(),
            asset_count: assets.len(),
        });

        for asset in &assets {
            match self.process_asset(asset, options)? {
                Some(file) => {
                    sink.on_event(&CompressEvent::FileCompressed {
                        path: file.source.clone(),
                        savings: file.savings,
                        dry_run: options.dry_run,
                    });
                    report.compressed.push(file);
                }
                None => {
                    sink.on_event(&CompressEvent::FileCurrent {
                        path: asset.path().to_path_buf(),
                    });
                    report.current.push(asset.path().to_path_buf());
                }
            }
        }

        tracing::info!(
            compressed = report.compressed.len(),
            current = report.current.len(),
            saved = report.total_saved(),
            "compression pass finished"
        );
        sink.on_event(&CompressEvent::Completed {
            compressed: report.compressed.len(),
            current: report.current.len(),
            total_saved: report.total_saved(),
            dry_run: options.dry_run,
        });

        Ok(report)
    }

    /// Compress a single asset. `None` when its artifact is current.
    fn process_asset(
        &self,
        asset: &Asset,
        options: &CompressOptions,
    ) -> AssetgzResult<Option<CompressedFile>> {
        let artifact_path = asset.artifact_path();
        let existing = self.store.artifact(&artifact_path)?;
        let freshness = Freshness::evaluate(asset.modified(), existing.map(|a| a.modified));

        if !options.force && !freshness.needs_compression() {
            tracing::debug!(path = %asset.path().display(), "artifact current, skipping");
            return Ok(None);
        }

        let content = self.store.read(asset.path())?;
        let encoded = self.codec.encode(&content)?;

        let compressed_size = if options.dry_run {
            encoded.len() as u64
        } else {
            self.store.write_artifact(&artifact_path, &encoded)?.size
        };

        let savings = Savings::new(content.len() as u64, compressed_size);
        tracing::debug!(
            path = %asset.path().display(),
            %freshness,
            original = savings.original,
            compressed = savings.compressed,
            "compressed asset"
        );

        Ok(Some(CompressedFile {
            source: asset.path().to_path_buf(),
            artifact: artifact_path,
            savings,
        }))
    }
}
