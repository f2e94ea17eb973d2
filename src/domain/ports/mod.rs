//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod asset_store;
pub mod codec;
pub mod compress_events;

pub use asset_store::AssetStore;
pub use codec::Codec;
pub use compress_events::{CompressEvent, CompressEventSink, NoopEventSink};
