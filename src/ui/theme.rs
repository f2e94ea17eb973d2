//! Colors and icons used by every report line.
//!
//! Views never spell out an icon themselves; `tests/no_hardcoded_ui_tokens.rs`
//! enforces that.

use crossterm::style::Color;

/// Semantic colors. Anything else is plain text.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    /// Up-to-date files, dry-run markers
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "→";
    pub const PENDING: &str = "○";

    // Summary line prefixes, one per command.
    pub const PACKAGE: &str = "📦";
    pub const CHECK: &str = "🔍";
    pub const CLEAN: &str = "🧹";
    pub const HOOK: &str = "⚓";
}

/// Fallbacks for `TERM=dumb`, non-UTF-8 locales and `output.unicode = false`.
pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "->";
    pub const PENDING: &str = "[ ]";

    pub const PACKAGE: &str = "[GZ]";
    pub const CHECK: &str = "[CHECK]";
    pub const CLEAN: &str = "[CLEAN]";
    pub const HOOK: &str = "[HOOK]";
}
