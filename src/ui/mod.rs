mod list;
mod theme;

pub use theme::Theme;

use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

const TITLE: &str = "GitHub Notifications";
const HELP: &str = "↑↓:Navigate  Enter:Open  r:Mark Read  f:Refresh  Tab:Summary  q:Quit";

pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let lines = build_frame(app, theme);
    frame.render_widget(Paragraph::new(lines), frame.area());
}

/// The whole screen as lines. Loading wins over errors, errors win over the
/// list.
pub fn build_frame(app: &App, theme: &Theme) -> Vec<Line<'static>> {
    if app.loading {
        loading_frame(theme)
    } else if let Some(error) = &app.error {
        error_frame(error, theme)
    } else {
        list_frame(app, theme)
    }
}

fn indented_title(theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::raw("  "), Span::styled(TITLE, theme.title)])
}

fn loading_frame(theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::default(),
        indented_title(theme),
        Line::default(),
        Line::raw("  Loading notifications..."),
    ]
}

fn error_frame(error: &str, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::default(),
        indented_title(theme),
        Line::default(),
        Line::styled(format!("  Error: {}", error), theme.error),
        Line::default(),
        Line::styled("  Press 'q' to quit, 'f' to retry", theme.dim),
    ]
}

fn list_frame(app: &App, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(TITLE, theme.title), Line::default()];

    if app.notifications.is_empty() {
        lines.push(Line::raw("No notifications found"));
    } else {
        lines.push(Line::styled(list::header(), theme.header));
        let range = list::visible_range(app.notifications.len(), app.selected, app.height);
        for (i, notification) in app.notifications[range.clone()].iter().enumerate() {
            let index = range.start + i;
            lines.push(list::row(
                notification,
                index,
                index == app.selected,
                app.width,
                theme,
            ));
        }
    }

    lines.push(Line::default());
    lines.push(Line::styled(app.status.clone(), theme.status));
    lines.push(Line::default());
    lines.push(Line::styled(HELP, theme.dim));
    lines
}
