//! Domain Entities
//!
//! - `Asset` - a static web file under the asset root
//! - `Artifact` - the gzip sibling produced from an asset

mod asset;

pub use asset::{artifact_path_for, Artifact, Asset, ARTIFACT_EXTENSION};
