use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeConfig;

/// Styles used by the renderer. Built once at startup and passed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub title: Style,
    pub header: Style,
    pub selected: Style,
    pub unread: Style,
    pub read: Style,
    pub dim: Style,
    pub status: Style,
    pub error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        let defaults = ThemeConfig::default();
        let fg = |value: &str, fallback: &str| Style::default().fg(color(value, fallback));

        Self {
            title: fg(&config.title, &defaults.title).add_modifier(Modifier::BOLD),
            header: fg(&config.header_fg, &defaults.header_fg)
                .bg(color(&config.header_bg, &defaults.header_bg))
                .add_modifier(Modifier::BOLD),
            selected: Style::default().add_modifier(Modifier::REVERSED),
            unread: fg(&config.unread, &defaults.unread),
            read: fg(&config.read, &defaults.read),
            dim: fg(&config.dim, &defaults.dim),
            status: fg(&config.status, &defaults.status),
            error: fg(&config.error, &defaults.error),
        }
    }
}

fn color(value: &str, fallback: &str) -> Color {
    value
        .parse()
        .or_else(|_| fallback.parse())
        .unwrap_or(Color::Reset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_and_named_colors() {
        assert_eq!(color("#FF5F87", "red"), Color::Rgb(0xFF, 0x5F, 0x87));
        assert_eq!(color("blue", "red"), Color::Blue);
    }

    #[test]
    fn invalid_color_falls_back() {
        assert_eq!(color("not-a-colour", "red"), Color::Red);
    }

    #[test]
    fn unread_and_read_differ() {
        let theme = Theme::default();
        assert_ne!(theme.unread, theme.read);
        assert!(theme.selected.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn config_overrides_slot() {
        let config = ThemeConfig {
            unread: "yellow".to_string(),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.unread.fg, Some(Color::Yellow));
        assert_eq!(theme.read, Theme::default().read);
    }
}
