//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions shared by the binary and its tests
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use assetgz::presentation::factory;
//!
//! let use_case = factory::create_compress_use_case(&config);
//! let report = use_case.execute(&root, &options, &sink)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{
    create_check_use_case, create_clean_use_case, create_compress_use_case, register_compressor,
};
