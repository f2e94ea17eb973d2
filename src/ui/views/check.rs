//! Check command UI views

use assetgz::application::{ArtifactStatus, CheckEntry, CheckReport};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn status_icon(status: ArtifactStatus) -> Icon {
    match status {
        ArtifactStatus::Current => Icon::Success,
        ArtifactStatus::Stale | ArtifactStatus::Missing => Icon::Warning,
        ArtifactStatus::Corrupt => Icon::Error,
    }
}

/// One line per asset that needs attention: `⚠ css/site.css: stale`
pub fn render_check_entry(
    entry: &CheckEntry,
    report: &CheckReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let name = entry
        .source
        .strip_prefix(&report.root)
        .unwrap_or(entry.source.as_path())
        .display()
        .to_string();
    let status = match entry.status {
        ArtifactStatus::Current => ColoredText::success(entry.status.to_string()),
        ArtifactStatus::Stale | ArtifactStatus::Missing => {
            ColoredText::warning(entry.status.to_string())
        }
        ArtifactStatus::Corrupt => ColoredText::error(entry.status.to_string()),
    };
    format!(
        "{} {}: {}",
        status_icon(entry.status).colored(supports_color, supports_unicode),
        name,
        status.render(supports_color)
    )
}

pub fn render_check_summary(
    report: &CheckReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let total = report.entries.len();
    if report.is_clean() {
        let what = if report.verified {
            "current and verified"
        } else {
            "current"
        };
        return format!(
            "{} {}",
            Icon::Check.colored(supports_color, supports_unicode),
            ColoredText::success(format!("{} of {} artifacts {}", total, total, what))
                .render(supports_color)
        );
    }

    let mut parts = Vec::new();
    for status in [
        ArtifactStatus::Stale,
        ArtifactStatus::Missing,
        ArtifactStatus::Corrupt,
    ] {
        let n = report.count(status);
        if n > 0 {
            parts.push(format!("{} {}", n, status));
        }
    }
    format!(
        "{} {}",
        Icon::Check.colored(supports_color, supports_unicode),
        ColoredText::error(format!(
            "{} of {} artifacts need attention ({})",
            total - report.count(ArtifactStatus::Current),
            total,
            parts.join(", ")
        ))
        .render(supports_color)
    )
}
