//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local asset store (walk, stat, atomic artifact writes)
//! - `codec/` - Gzip codec

pub mod codec;
pub mod fs;

pub use codec::GzipCodec;
pub use fs::LocalAssetStore;
