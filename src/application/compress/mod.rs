//! Compress Use Case
//!
//! Orchestrates one compression pass over the asset root.
//!
//! This module handles:
//! - Treating a missing root as a benign no-op
//! - Discovering eligible assets
//! - Skipping artifacts newer than their source
//! - Compressing and writing stale or missing artifacts

mod options;
mod result;
mod use_case;

#[cfg(test)]
mod tests;

pub use options::CompressOptions;
pub use result::{CompressReport, CompressedFile};
pub use use_case::CompressUseCase;
