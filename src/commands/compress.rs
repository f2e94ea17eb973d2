//! Compress command handler

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use assetgz::presentation::factory::create_compress_use_case;
use assetgz::{CompressOptions, CompressionLevel};

use super::CommandContext;
use crate::ui::json::{emit_event, events::StartEvent};
use crate::ui::sink::event_sink;

pub fn cmd_compress(
    ctx: &CommandContext,
    root: Option<&Path>,
    level: Option<u32>,
    force: bool,
    dry_run: bool,
) -> Result<ExitCode> {
    let mut config = ctx.config.clone();
    if let Some(level) = level {
        config.compress.level = CompressionLevel::new(level)?;
    }

    let root = ctx.asset_root(root);
    let options = CompressOptions::new()
        .with_extensions(config.extension_set()?)
        .with_force(force)
        .with_dry_run(dry_run);

    if ctx.ui.json {
        emit_event(&StartEvent::new("compress"))?;
    }

    let sink = event_sink(ctx.ui, &ctx.project_root);
    create_compress_use_case(&config)
        .execute(&root, &options, sink.as_ref())
        .with_context(|| format!("failed to compress assets in {}", root.display()))?;

    Ok(ExitCode::SUCCESS)
}
