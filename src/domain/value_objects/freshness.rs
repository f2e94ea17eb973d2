//! Artifact freshness
//!
//! Timestamp heuristic: an artifact is current only when it was modified
//! strictly after its source. Equal timestamps count as stale.

use std::fmt;
use std::time::SystemTime;

/// State of an asset's compressed artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// No artifact on disk
    Missing,
    /// Artifact exists but is not newer than the source
    Stale,
    /// Artifact is strictly newer than the source
    Current,
}

impl Freshness {
    pub fn evaluate(source_modified: SystemTime, artifact_modified: Option<SystemTime>) -> Self {
        match artifact_modified {
            None => Freshness::Missing,
            Some(artifact) if artifact > source_modified => Freshness::Current,
            Some(_) => Freshness::Stale,
        }
    }

    pub fn needs_compression(self) -> bool {
        !matches!(self, Freshness::Current)
    }
}

impl fmt::Display for Freshness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Freshness::Missing => write!(f, "missing"),
            Freshness::Stale => write!(f, "stale"),
            Freshness::Current => write!(f, "current"),
        }
    }
}
