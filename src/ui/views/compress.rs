//! Compress command UI views
//!
//! One line per compressed file, then a single summary line.

use std::path::Path;

use assetgz::Savings;

use crate::ui::primitives::icon::{arrow, Icon};
use crate::ui::primitives::number::{grouped, grouped_signed, savings_percent};
use crate::ui::primitives::text::ColoredText;

/// `✓ app.js: 12,345 → 3,210 bytes (-74%)`
pub fn render_file_line(
    name: &str,
    savings: &Savings,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = if dry_run { Icon::Pending } else { Icon::Success };
    let mut line = format!(
        "{} {}: {} {} {} bytes ({})",
        icon.colored(supports_color, supports_unicode),
        name,
        grouped(savings.original),
        arrow(supports_unicode),
        grouped(savings.compressed),
        savings_percent(savings.percent()),
    );
    if dry_run {
        line.push(' ');
        line.push_str(&ColoredText::dim("(dry run)").render(supports_color));
    }
    line
}

/// Shown with `-v` for assets whose artifact is already current.
pub fn render_current_line(name: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}",
        Icon::Pending.colored(supports_color, supports_unicode),
        ColoredText::dim(format!("{}: up to date", name)).render(supports_color)
    )
}

/// Summary after a pass. `compressed == 0` means nothing needed work.
pub fn render_summary(
    compressed: usize,
    total_saved: i64,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if compressed == 0 {
        return format!(
            "{} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success("All files already compressed").render(supports_color)
        );
    }

    let (verb, gerund) = if dry_run {
        ("Would compress", "saving")
    } else {
        ("Compressed", "saved")
    };
    format!(
        "{} {} {} {}, {} {} bytes total",
        Icon::Package.colored(supports_color, supports_unicode),
        verb,
        compressed,
        if compressed == 1 { "file" } else { "files" },
        gerund,
        grouped_signed(total_saved),
    )
}

/// `⚠ data/ directory not found, skipping compression`
pub fn render_root_missing(root: &Path, supports_color: bool, supports_unicode: bool) -> String {
    let shown = root.display().to_string();
    let trimmed = shown.trim_end_matches(['/', '\\']);
    let name = if trimmed.is_empty() { shown.as_str() } else { trimmed };
    format!(
        "{} {}",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning(format!(
            "{}/ directory not found, skipping compression",
            name
        ))
        .render(supports_color)
    )
}
