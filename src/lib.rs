//! assetgz - precompress static web assets for embedded web servers
//!
//! Before a filesystem image is uploaded to a device, assetgz walks the asset
//! directory and writes a gzip sibling (`app.js.gz`) for every eligible file
//! whose artifact is missing or older than its source. The device's web
//! server then serves the `.gz` variants directly.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    CheckOptions, CheckReport, CleanOptions, CleanReport, CompressOptions, CompressReport,
    HookContext, HookRegistry,
};
pub use config::Config;
pub use domain::ports::{CompressEvent, CompressEventSink};
pub use domain::value_objects::{CompressionLevel, ExtensionSet, Savings};
pub use error::{AssetgzError, AssetgzResult};
