//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --project, --config) are inherited by all subcommands
//! - Running `assetgz` with no subcommand is the same as `assetgz compress`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// assetgz - precompress static web assets before a filesystem upload
#[derive(Parser, Debug)]
#[command(name = "assetgz")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'assetgz' without arguments to compress ./data.")]
pub struct Cli {
    /// Emit NDJSON events on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project root; relative asset roots resolve against it
    #[arg(long, global = true, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Config file (defaults to <project>/assetgz.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Gzip every eligible asset whose artifact is missing or stale
    Compress {
        /// Asset root (default: data)
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// Compression level 0-9 (default: 9)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=9))]
        level: Option<u32>,

        /// Regenerate artifacts even when they are current
        #[arg(short, long)]
        force: bool,

        /// Report projected sizes without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Report stale, missing or corrupt artifacts (exit 1 if any)
    Check {
        /// Asset root (default: data)
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// Decompress current artifacts and compare with the source
        #[arg(long)]
        verify: bool,
    },

    /// Remove the artifacts of eligible assets
    Clean {
        /// Asset root (default: data)
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// List what would be removed without deleting
        #[arg(long)]
        dry_run: bool,
    },

    /// Run the pre-actions registered for a build action
    Hook {
        /// Build action name, e.g. uploadfs
        #[arg(required_unless_present = "list")]
        action: Option<String>,

        /// List registered actions instead of running one
        #[arg(long, conflicts_with = "action")]
        list: bool,
    },
}

impl Commands {
    /// The command run when none is given.
    pub fn default_compress() -> Self {
        Commands::Compress {
            root: None,
            level: None,
            force: false,
            dry_run: false,
        }
    }
}
