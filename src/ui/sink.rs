//! Compress event sinks for the terminal and for NDJSON.

use std::path::{Path, PathBuf};

use assetgz::{CompressEvent, CompressEventSink};

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::CompressEventJson};
use crate::ui::views::compress::{
    render_current_line, render_file_line, render_root_missing, render_summary,
};

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Prints the human report: a line per compressed file and a summary.
pub struct ConsoleEventSink {
    ui: UiContext,
    /// Roots are shown relative to this directory
    project_root: PathBuf,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext, project_root: impl Into<PathBuf>) -> Self {
        Self {
            ui,
            project_root: project_root.into(),
        }
    }

    fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.project_root).unwrap_or(path)
    }
}

impl CompressEventSink for ConsoleEventSink {
    fn on_event(&self, event: &CompressEvent) {
        let (color, unicode) = (self.ui.color, self.ui.unicode);
        match event {
            CompressEvent::RootMissing { root } => {
                println!("{}", render_root_missing(self.relative(root), color, unicode));
            }
            CompressEvent::Started { .. } => {}
            CompressEvent::FileCurrent { path } => {
                if self.ui.verbose > 0 {
                    println!("{}", render_current_line(&file_name(path), color, unicode));
                }
            }
            CompressEvent::FileCompressed {
                path,
                savings,
                dry_run,
            } => {
                println!(
                    "{}",
                    render_file_line(&file_name(path), savings, *dry_run, color, unicode)
                );
            }
            CompressEvent::Completed {
                compressed,
                total_saved,
                dry_run,
                ..
            } => {
                println!(
                    "{}",
                    render_summary(*compressed, *total_saved, *dry_run, color, unicode)
                );
            }
        }
    }
}

/// Writes every event as one NDJSON line on stdout.
pub struct JsonEventSink;

impl CompressEventSink for JsonEventSink {
    fn on_event(&self, event: &CompressEvent) {
        if let Err(e) = emit_event(&CompressEventJson::from(event)) {
            tracing::warn!(error = %e, "failed to write json event");
        }
    }
}

/// Sink matching the output mode.
pub fn event_sink(ui: UiContext, project_root: &Path) -> Box<dyn CompressEventSink> {
    if ui.json {
        Box::new(JsonEventSink)
    } else {
        Box::new(ConsoleEventSink::new(ui, project_root))
    }
}
