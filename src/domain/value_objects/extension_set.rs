//! Extension allow-set value object
//!
//! Decides which files under the asset root are eligible for compression.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use crate::domain::entities::ARTIFACT_EXTENSION;
use crate::error::{AssetgzError, AssetgzResult};

/// Extensions compressed when nothing else is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["html", "css", "js", "json", "svg", "xml"];

/// Set of file extensions (without the leading dot) eligible for compression.
///
/// Matching is case-sensitive and looks at the final extension only, so
/// `app.min.js` matches `js` and `.html` (a dotfile) matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: BTreeSet<String>,
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl ExtensionSet {
    /// Build a set from user-supplied extensions.
    ///
    /// A leading dot is accepted and stripped (`".css"` == `"css"`).
    /// Rejects empty entries, entries with inner dots or path separators,
    /// and the artifact extension itself.
    pub fn parse<I, S>(extensions: I) -> AssetgzResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();

        for raw in extensions {
            let raw = raw.as_ref().trim();
            let ext = raw.strip_prefix('.').unwrap_or(raw);

            let invalid = |reason: &str| AssetgzError::InvalidExtension {
                extension: raw.to_string(),
                reason: reason.to_string(),
            };

            if ext.is_empty() {
                return Err(invalid("extension is empty"));
            }
            if ext.contains(['.', '/', '\\']) {
                return Err(invalid("only the final extension is matched"));
            }
            if ext == ARTIFACT_EXTENSION {
                return Err(invalid("artifacts would be compressed again on every run"));
            }

            set.insert(ext.to_string());
        }

        if set.is_empty() {
            return Err(AssetgzError::InvalidExtension {
                extension: String::new(),
                reason: "at least one extension is required".to_string(),
            });
        }

        Ok(Self { extensions: set })
    }

    /// Check whether `path` has an eligible extension.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.extensions.contains(e))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "{}", joined.join(","))
    }
}
