//! Shared JSON event types for consistent CLI output.
//!
//! Every line carries an `event` field; paths are rendered with
//! `Path::display`.

use std::path::Path;

use serde::Serialize;

use assetgz::application::{ArtifactStatus, CheckEntry, CheckReport};
use assetgz::config::ConfigWarning;
use assetgz::{CleanReport, CompressEvent};

fn path_string(path: &Path) -> String {
    path.display().to_string()
}

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigWarningEvent {
    pub event: &'static str,
    pub key: String,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl From<&ConfigWarning> for ConfigWarningEvent {
    fn from(w: &ConfigWarning) -> Self {
        Self {
            event: "config_warning",
            key: w.key.clone(),
            file: path_string(&w.file),
            line: w.line,
            suggestion: w.suggestion.clone(),
        }
    }
}

/// NDJSON form of a [`CompressEvent`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CompressEventJson {
    RootMissing {
        root: String,
    },
    Scan {
        root: String,
        assets: usize,
    },
    Compressed {
        path: String,
        original: u64,
        compressed: u64,
        saved: i64,
        percent: f64,
        dry_run: bool,
    },
    Current {
        path: String,
    },
    Complete {
        command: &'static str,
        compressed: usize,
        current: usize,
        total_saved: i64,
        dry_run: bool,
    },
}

impl From<&CompressEvent> for CompressEventJson {
    fn from(event: &CompressEvent) -> Self {
        match event {
            CompressEvent::RootMissing { root } => Self::RootMissing {
                root: path_string(root),
            },
            CompressEvent::Started { root, asset_count } => Self::Scan {
                root: path_string(root),
                assets: *asset_count,
            },
            CompressEvent::FileCompressed {
                path,
                savings,
                dry_run,
            } => Self::Compressed {
                path: path_string(path),
                original: savings.original,
                compressed: savings.compressed,
                saved: savings.saved(),
                percent: (savings.percent() * 10.0).round() / 10.0,
                dry_run: *dry_run,
            },
            CompressEvent::FileCurrent { path } => Self::Current {
                path: path_string(path),
            },
            CompressEvent::Completed {
                compressed,
                current,
                total_saved,
                dry_run,
            } => Self::Complete {
                command: "compress",
                compressed: *compressed,
                current: *current,
                total_saved: *total_saved,
                dry_run: *dry_run,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtifactStatusEvent {
    pub event: &'static str,
    pub path: String,
    pub artifact: String,
    pub status: String,
}

impl From<&CheckEntry> for ArtifactStatusEvent {
    fn from(entry: &CheckEntry) -> Self {
        Self {
            event: "artifact",
            path: path_string(&entry.source),
            artifact: path_string(&entry.artifact),
            status: entry.status.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckCompleteEvent {
    pub event: &'static str,
    pub command: &'static str,
    pub root_missing: bool,
    pub verified: bool,
    pub clean: bool,
    pub current: usize,
    pub stale: usize,
    pub missing: usize,
    pub corrupt: usize,
}

impl CheckCompleteEvent {
    pub fn from_report(report: &CheckReport) -> Self {
        Self {
            event: "complete",
            command: "check",
            root_missing: report.root_missing,
            verified: report.verified,
            clean: report.is_clean(),
            current: report.count(ArtifactStatus::Current),
            stale: report.count(ArtifactStatus::Stale),
            missing: report.count(ArtifactStatus::Missing),
            corrupt: report.count(ArtifactStatus::Corrupt),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RemovedEvent {
    pub event: &'static str,
    pub path: String,
    pub dry_run: bool,
}

impl RemovedEvent {
    pub fn new(path: &Path, dry_run: bool) -> Self {
        Self {
            event: "removed",
            path: path_string(path),
            dry_run,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CleanCompleteEvent {
    pub event: &'static str,
    pub command: &'static str,
    pub root_missing: bool,
    pub removed: usize,
    pub dry_run: bool,
}

impl CleanCompleteEvent {
    pub fn from_report(report: &CleanReport) -> Self {
        Self {
            event: "complete",
            command: "clean",
            root_missing: report.root_missing,
            removed: report.removed.len(),
            dry_run: report.dry_run,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HookListEvent<'a> {
    pub event: &'static str,
    pub actions: Vec<&'a str>,
}

impl<'a> HookListEvent<'a> {
    pub fn new(actions: Vec<&'a str>) -> Self {
        Self {
            event: "hooks",
            actions,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HookCompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'static str,
    pub action: &'a str,
    pub pre_actions: usize,
}

impl<'a> HookCompleteEvent<'a> {
    pub fn new(action: &'a str, pre_actions: usize) -> Self {
        Self {
            event: "complete",
            command: "hook",
            action,
            pre_actions,
        }
    }
}
