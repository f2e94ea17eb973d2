//! Hook command handler
//!
//! Entry point for build tools: `assetgz hook uploadfs` runs every
//! pre-action registered for `uploadfs`.

use std::process::ExitCode;

use anyhow::{Context, Result};

use assetgz::presentation::factory::register_compressor;
use assetgz::{HookContext, HookRegistry};

use super::CommandContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{HookCompleteEvent, HookListEvent};
use crate::ui::sink::event_sink;
use crate::ui::views::hooks::{render_hook_list, render_no_pre_actions};

pub fn cmd_hook(ctx: &CommandContext, action: Option<&str>, list: bool) -> Result<ExitCode> {
    let ui = &ctx.ui;
    let sink = event_sink(ctx.ui, &ctx.project_root);
    let mut registry = HookRegistry::new();
    register_compressor(&mut registry, &ctx.config, sink.as_ref())?;

    if list {
        if ui.json {
            emit_event(&HookListEvent::new(registry.actions()))?;
        } else {
            println!(
                "{}",
                render_hook_list(&registry.actions(), ui.color, ui.unicode)
            );
        }
        return Ok(ExitCode::SUCCESS);
    }

    let action = action.context("an action name is required unless --list is given")?;
    let ran = registry
        .run_pre_actions(&HookContext::new(action, &ctx.project_root))
        .with_context(|| format!("pre-action for '{}' failed", action))?;

    if ui.json {
        emit_event(&HookCompleteEvent::new(action, ran))?;
    } else if ran == 0 {
        println!("{}", render_no_pre_actions(action, ui.color, ui.unicode));
    }

    Ok(ExitCode::SUCCESS)
}
