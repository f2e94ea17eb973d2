use assetgz::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// `⚠ Unknown config key 'levl' in assetgz.toml:2 (did you mean 'level'?)`
pub fn render_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut location = warning.file.display().to_string();
    if let Some(line) = warning.line {
        location.push_str(&format!(":{}", line));
    }
    let mut text = format!("Unknown config key '{}' in {}", warning.key, location);
    if let Some(suggestion) = &warning.suggestion {
        text.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    format!(
        "{} {}",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning(text).render(supports_color)
    )
}
