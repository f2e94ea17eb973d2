//! Codec Implementations

mod gzip;

pub use gzip::GzipCodec;
