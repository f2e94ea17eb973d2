//! Gzip codec (RFC 1952) backed by `flate2`.
//!
//! The header carries no file name and a zero mtime, so identical input
//! always yields identical artifacts.

use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::domain::ports::Codec;
use crate::domain::value_objects::CompressionLevel;
use crate::error::AssetgzResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct GzipCodec {
    level: CompressionLevel,
}

impl GzipCodec {
    pub fn new(level: CompressionLevel) -> Self {
        Self { level }
    }

    pub fn level(&self) -> CompressionLevel {
        self.level
    }
}

impl Codec for GzipCodec {
    fn name(&self) -> &'static str {
        "gzip"
    }

    fn encode(&self, input: &[u8]) -> AssetgzResult<Vec<u8>> {
        let mut encoder = GzEncoder::new(
            Vec::with_capacity(input.len() / 2 + 32),
            Compression::new(self.level.get()),
        );
        encoder.write_all(input)?;
        Ok(encoder.finish()?)
    }

    fn decode(&self, input: &[u8]) -> AssetgzResult<Vec<u8>> {
        let mut decoder = GzDecoder::new(input);
        let mut out = Vec::new();
        decoder.read_to_end(&mut out)?;
        Ok(out)
    }
}
