//! File System Implementations
//!
//! Concrete implementations of the AssetStore port.

mod local;

pub use local::LocalAssetStore;
