//! Codec port - single-file compression format

use crate::error::AssetgzResult;

/// Compresses whole buffers into a single-file format.
pub trait Codec {
    /// Human-readable format name (for logs and JSON output)
    fn name(&self) -> &'static str;

    fn encode(&self, input: &[u8]) -> AssetgzResult<Vec<u8>>;

    fn decode(&self, input: &[u8]) -> AssetgzResult<Vec<u8>>;
}
