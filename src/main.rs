//! assetgz CLI - precompress static web assets
//!
//! Usage: assetgz [COMMAND]
//!
//! Commands:
//!   compress  Gzip stale assets (default)
//!   check     Report stale, missing or corrupt artifacts
//!   clean     Remove generated artifacts
//!   hook      Run the pre-actions for a build action

mod commands;
mod ui;

use std::process::ExitCode;

use clap::Parser;

use assetgz::logging::init_logging;
use assetgz::presentation::Cli;

use crate::ui::json::{emit_event, events::ErrorEvent};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let json = cli.json;
    let command = commands::command_name(cli.command.as_ref());

    match commands::run(cli) {
        Ok(code) => code,
        Err(err) => {
            if json {
                let _ = emit_event(&ErrorEvent::new(command, format!("{:#}", err)));
            } else {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}
