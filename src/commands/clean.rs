//! Clean command handler
//!
//! Removes the `.gz` artifacts of eligible assets.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use assetgz::presentation::factory::create_clean_use_case;
use assetgz::CleanOptions;

use super::CommandContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CleanCompleteEvent, RemovedEvent, StartEvent};
use crate::ui::views::clean::{render_clean_summary, render_removed};
use crate::ui::views::compress::render_root_missing;

pub fn cmd_clean(ctx: &CommandContext, root: Option<&Path>, dry_run: bool) -> Result<ExitCode> {
    let root = ctx.asset_root(root);
    let options = CleanOptions {
        extensions: ctx.config.extension_set()?,
        dry_run,
    };

    if ctx.ui.json {
        emit_event(&StartEvent::new("clean"))?;
    }

    let report = create_clean_use_case(&ctx.config)
        .execute(&root, &options)
        .with_context(|| format!("failed to clean artifacts in {}", root.display()))?;

    let ui = &ctx.ui;
    if ui.json {
        for path in &report.removed {
            emit_event(&RemovedEvent::new(path, report.dry_run))?;
        }
        emit_event(&CleanCompleteEvent::from_report(&report))?;
    } else if report.root_missing {
        let shown = root.strip_prefix(&ctx.project_root).unwrap_or(root.as_path());
        println!("{}", render_root_missing(shown, ui.color, ui.unicode));
    } else {
        for path in &report.removed {
            println!("{}", render_removed(path, &report, ui.color));
        }
        println!("{}", render_clean_summary(&report, ui.color, ui.unicode));
    }

    Ok(ExitCode::SUCCESS)
}
