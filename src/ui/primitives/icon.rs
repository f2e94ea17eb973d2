use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Pending,
    Package,
    Check,
    Clean,
    Hook,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Pending) => theme::icons::PENDING,
            (true, Icon::Package) => theme::icons::PACKAGE,
            (true, Icon::Check) => theme::icons::CHECK,
            (true, Icon::Clean) => theme::icons::CLEAN,
            (true, Icon::Hook) => theme::icons::HOOK,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Pending) => theme::icons_ascii::PENDING,
            (false, Icon::Package) => theme::icons_ascii::PACKAGE,
            (false, Icon::Check) => theme::icons_ascii::CHECK,
            (false, Icon::Clean) => theme::icons_ascii::CLEAN,
            (false, Icon::Hook) => theme::icons_ascii::HOOK,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Pending => theme::colors::DIM,
            Icon::Package | Icon::Check | Icon::Clean | Icon::Hook => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}

/// The arrow between original and compressed sizes.
pub fn arrow(supports_unicode: bool) -> &'static str {
    if supports_unicode {
        theme::icons::ARROW
    } else {
        theme::icons_ascii::ARROW
    }
}
