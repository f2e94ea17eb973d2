//! Clean command UI views

use std::path::Path;

use assetgz::CleanReport;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::number::grouped;
use crate::ui::primitives::text::ColoredText;

pub fn render_removed(path: &Path, report: &CleanReport, supports_color: bool) -> String {
    let name = path.strip_prefix(&report.root).unwrap_or(path);
    let verb = if report.dry_run { "would remove" } else { "removed" };
    format!(
        "  {} {}",
        ColoredText::dim(verb).render(supports_color),
        name.display()
    )
}

pub fn render_clean_summary(
    report: &CleanReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let n = report.removed.len();
    let noun = if n == 1 { "artifact" } else { "artifacts" };
    let text = match (n, report.dry_run) {
        (0, _) => "No artifacts to remove".to_string(),
        (_, true) => format!("Would remove {} {}", grouped(n as u64), noun),
        (_, false) => format!("Removed {} {}", grouped(n as u64), noun),
    };
    format!(
        "{} {}",
        Icon::Clean.colored(supports_color, supports_unicode),
        ColoredText::info(text).render(supports_color)
    )
}
