//! Command handlers
//!
//! Each handler loads nothing itself: [`CommandContext`] carries the
//! resolved project root, layered config and UI settings.

pub mod check;
pub mod clean;
pub mod compress;
pub mod hook;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};

use assetgz::config::Config;
use assetgz::presentation::{Cli, Commands};

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::ConfigWarningEvent};
use crate::ui::views::config::render_config_warning;

/// Everything a command needs besides its own flags.
pub struct CommandContext {
    pub project_root: PathBuf,
    pub config: Config,
    pub ui: UiContext,
}

impl CommandContext {
    pub fn load(cli: &Cli) -> Result<Self> {
        let project_root = cli.project.clone().unwrap_or_else(|| PathBuf::from("."));
        let (config, warnings) = Config::load_layered(&project_root, cli.config.as_deref())
            .context("failed to load configuration")?;
        let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);

        for warning in &warnings {
            if ui.json {
                emit_event(&ConfigWarningEvent::from(warning))?;
            } else {
                eprintln!("{}", render_config_warning(warning, ui.color, ui.unicode));
            }
        }

        Ok(Self {
            project_root,
            config,
            ui,
        })
    }

    /// `--root` if given, else the configured root, resolved against the
    /// project root.
    pub fn asset_root(&self, cli_root: Option<&Path>) -> PathBuf {
        match cli_root {
            Some(root) => self.project_root.join(root),
            None => self.config.asset_root(&self.project_root),
        }
    }
}

/// Name used in JSON events for a (possibly defaulted) command.
pub fn command_name(command: Option<&Commands>) -> &'static str {
    match command {
        None | Some(Commands::Compress { .. }) => "compress",
        Some(Commands::Check { .. }) => "check",
        Some(Commands::Clean { .. }) => "clean",
        Some(Commands::Hook { .. }) => "hook",
    }
}

pub fn run(cli: Cli) -> Result<ExitCode> {
    let ctx = CommandContext::load(&cli)?;

    match cli.command.unwrap_or_else(Commands::default_compress) {
        Commands::Compress {
            root,
            level,
            force,
            dry_run,
        } => compress::cmd_compress(&ctx, root.as_deref(), level, force, dry_run),
        Commands::Check { root, verify } => check::cmd_check(&ctx, root.as_deref(), verify),
        Commands::Clean { root, dry_run } => clean::cmd_clean(&ctx, root.as_deref(), dry_run),
        Commands::Hook { action, list } => hook::cmd_hook(&ctx, action.as_deref(), list),
    }
}
