//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod compression_level;
mod config_warning;
mod extension_set;
mod freshness;
mod ignore_patterns;
mod savings;

pub use compression_level::CompressionLevel;
pub use config_warning::ConfigWarning;
pub use extension_set::{ExtensionSet, DEFAULT_EXTENSIONS};
pub use freshness::Freshness;
pub use ignore_patterns::{IgnoreError, IgnorePatterns, IGNORE_FILE_NAME};
pub use savings::Savings;
