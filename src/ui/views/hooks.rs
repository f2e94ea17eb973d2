//! Hook command UI views

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_hook_list(actions: &[&str], supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}",
        Icon::Hook.colored(supports_color, supports_unicode),
        ColoredText::info("Registered pre-actions").bold().render(supports_color)
    );
    for action in actions {
        out.push_str(&format!("\n  {}", action));
    }
    out
}

pub fn render_no_pre_actions(action: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}",
        Icon::Hook.colored(supports_color, supports_unicode),
        ColoredText::dim(format!("No pre-actions registered for '{}'", action))
            .render(supports_color)
    )
}
