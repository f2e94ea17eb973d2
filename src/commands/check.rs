//! Check command handler
//!
//! Exits with status 1 when any artifact is stale, missing or corrupt.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use assetgz::presentation::factory::create_check_use_case;
use assetgz::CheckOptions;

use super::CommandContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{ArtifactStatusEvent, CheckCompleteEvent, StartEvent};
use crate::ui::views::check::{render_check_entry, render_check_summary};
use crate::ui::views::compress::render_root_missing;

pub fn cmd_check(ctx: &CommandContext, root: Option<&Path>, verify: bool) -> Result<ExitCode> {
    let root = ctx.asset_root(root);
    let options = CheckOptions {
        extensions: ctx.config.extension_set()?,
        verify,
    };

    if ctx.ui.json {
        emit_event(&StartEvent::new("check"))?;
    }

    let report = create_check_use_case(&ctx.config)
        .execute(&root, &options)
        .with_context(|| format!("failed to check artifacts in {}", root.display()))?;

    let ui = &ctx.ui;
    if ui.json {
        for entry in &report.entries {
            emit_event(&ArtifactStatusEvent::from(entry))?;
        }
        emit_event(&CheckCompleteEvent::from_report(&report))?;
    } else if report.root_missing {
        let shown = root.strip_prefix(&ctx.project_root).unwrap_or(root.as_path());
        println!("{}", render_root_missing(shown, ui.color, ui.unicode));
    } else {
        for entry in &report.entries {
            if ui.verbose > 0 || !entry.status.is_ok() {
                println!("{}", render_check_entry(entry, &report, ui.color, ui.unicode));
            }
        }
        println!("{}", render_check_summary(&report, ui.color, ui.unicode));
    }

    Ok(if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
