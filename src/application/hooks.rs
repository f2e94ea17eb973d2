//! Pre-action hooks
//!
//! Build tools run named actions (`uploadfs`, `uploadfsota`). A
//! [`HookRegistry`] maps each action to callbacks that must run right before
//! it. Registration happens once, explicitly, when the CLI starts.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::error::AssetgzResult;

/// Filesystem image upload.
pub const UPLOAD_FS: &str = "uploadfs";

/// Over-the-air filesystem image upload.
pub const UPLOAD_FS_OTA: &str = "uploadfsota";

/// Actions the compressor is registered for unless configured otherwise.
pub const DEFAULT_PRE_ACTIONS: &[&str] = &[UPLOAD_FS, UPLOAD_FS_OTA];

/// What the build tool tells a callback about the action being run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookContext {
    pub action: String,
    /// Directory relative asset roots are resolved against
    pub project_root: PathBuf,
}

impl HookContext {
    pub fn new(action: impl Into<String>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            action: action.into(),
            project_root: project_root.into(),
        }
    }
}

pub type PreAction<'a> = Box<dyn Fn(&HookContext) -> AssetgzResult<()> + 'a>;

/// Registry of pre-action callbacks keyed by action name.
#[derive(Default)]
pub struct HookRegistry<'a> {
    pre_actions: BTreeMap<String, Vec<PreAction<'a>>>,
}

impl<'a> HookRegistry<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` to run before `action`. Callbacks for the same
    /// action run in registration order.
    pub fn add_pre_action<F>(&mut self, action: impl Into<String>, callback: F)
    where
        F: Fn(&HookContext) -> AssetgzResult<()> + 'a,
    {
        let action = action.into();
        tracing::debug!(%action, "registered pre-action");
        self.pre_actions
            .entry(action)
            .or_default()
            .push(Box::new(callback));
    }

    /// Registered action names, sorted.
    pub fn actions(&self) -> Vec<&str> {
        self.pre_actions.keys().map(String::as_str).collect()
    }

    pub fn has_action(&self, action: &str) -> bool {
        self.pre_actions.contains_key(action)
    }

    /// Run every callback registered for `ctx.action`.
    ///
    /// Returns how many ran; an unknown action runs nothing. The first
    /// failing callback stops the run.
    pub fn run_pre_actions(&self, ctx: &HookContext) -> AssetgzResult<usize> {
        let Some(callbacks) = self.pre_actions.get(&ctx.action) else {
            tracing::info!(action = %ctx.action, "no pre-actions registered");
            return Ok(0);
        };

        for callback in callbacks {
            callback(ctx)?;
        }
        Ok(callbacks.len())
    }
}

impl fmt::Debug for HookRegistry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.pre_actions.iter().map(|(k, v)| (k, v.len())))
            .finish()
    }
}
