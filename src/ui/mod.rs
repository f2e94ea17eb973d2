//! Terminal and NDJSON presentation for the binary.

pub mod context;
pub mod json;
pub mod primitives;
pub mod sink;
pub mod terminal;
pub mod theme;
pub mod views;
