//! Domain Layer
//!
//! Pure types and rules for asset compression, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Asset and Artifact
//! - `value_objects/` - ExtensionSet, CompressionLevel, Freshness, Savings, IgnorePatterns
//! - `ports/` - Interfaces implemented by the infrastructure layer

pub mod entities;
pub mod ports;
pub mod value_objects;
