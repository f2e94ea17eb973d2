//! Compress Event Port
//!
//! Observable interface for a compression pass. The CLI turns these into
//! terminal lines or NDJSON.

use std::path::PathBuf;

use crate::domain::value_objects::Savings;

/// Event emitted during a compression pass
#[derive(Debug, Clone, PartialEq)]
pub enum CompressEvent {
    /// Root does not exist; the pass is a no-op
    RootMissing { root: PathBuf },

    /// Assets discovered, pass starting
    Started { root: PathBuf, asset_count: usize },

    /// Artifact written (or would be, in dry run)
    FileCompressed {
        path: PathBuf,
        savings: Savings,
        dry_run: bool,
    },

    /// Artifact already newer than its source
    FileCurrent { path: PathBuf },

    /// Pass finished
    Completed {
        compressed: usize,
        current: usize,
        total_saved: i64,
        dry_run: bool,
    },
}

/// Trait for receiving compress events
///
/// Implementations:
/// - `ConsoleEventSink` (CLI): one line per file plus a summary
/// - `JsonEventSink` (CLI): NDJSON stream
/// - `NoopEventSink`: silent operation
pub trait CompressEventSink {
    fn on_event(&self, event: &CompressEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl CompressEventSink for NoopEventSink {
    fn on_event(&self, _event: &CompressEvent) {}
}

impl<S: CompressEventSink + ?Sized> CompressEventSink for &S {
    fn on_event(&self, event: &CompressEvent) {
        (**self).on_event(event)
    }
}

impl<S: CompressEventSink + ?Sized> CompressEventSink for std::rc::Rc<S> {
    fn on_event(&self, event: &CompressEvent) {
        (**self).on_event(event)
    }
}
