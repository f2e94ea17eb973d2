//! Configuration module for assetgz
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ASSETGZ_*)
//! 3. Explicit `--config` file or project config (`assetgz.toml`)
//! 4. User config (`<config_dir>/assetgz/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{user_config_path, with_env_overrides, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, CompressConfig, Config, HooksConfig, OutputConfig};
