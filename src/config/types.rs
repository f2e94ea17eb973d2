//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CompressionLevel, ConfigWarning, ExtensionSet, DEFAULT_EXTENSIONS};
use crate::error::AssetgzResult;
use crate::application::hooks::DEFAULT_PRE_ACTIONS;

use super::loader;

/// Compression configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressConfig {
    /// Asset root, relative to the project root unless absolute
    #[serde(default = "default_root")]
    pub root: PathBuf,

    #[serde(default)]
    pub level: CompressionLevel,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default = "default_true")]
    pub atomic_writes: bool,
}

impl Default for CompressConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            level: CompressionLevel::default(),
            extensions: default_extensions(),
            atomic_writes: true,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("data")
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

fn default_true() -> bool {
    true
}

/// Build-tool hook configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HooksConfig {
    #[serde(default = "default_pre_actions")]
    pub pre_actions: Vec<String>,
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            pre_actions: default_pre_actions(),
        }
    }
}

fn default_pre_actions() -> Vec<String> {
    DEFAULT_PRE_ACTIONS.iter().map(|s| s.to_string()).collect()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub compress: CompressConfig,

    #[serde(default)]
    pub hooks: HooksConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> AssetgzResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys).
    pub fn load_with_warnings(path: &Path) -> AssetgzResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Layered load: explicit file or project config, then user config,
    /// then defaults. Environment overrides are applied on top.
    pub fn load_layered(
        project_root: &Path,
        explicit: Option<&Path>,
    ) -> AssetgzResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(project_root, explicit)
    }

    /// The configured allow-set, validated.
    pub fn extension_set(&self) -> AssetgzResult<ExtensionSet> {
        ExtensionSet::parse(&self.compress.extensions)
    }

    /// Asset root resolved against `project_root`.
    pub fn asset_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.compress.root)
    }

    /// Check the values serde cannot check on its own.
    pub fn validate(&self) -> AssetgzResult<()> {
        self.extension_set()?;
        Ok(())
    }
}
