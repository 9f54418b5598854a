use std::ops::Range;

use ratatui::text::{Line, Span};

use crate::types::Notification;
use crate::ui::Theme;

/// Title, blank, header, blank, status, blank, help plus one spare line
pub const CHROME_LINES: usize = 8;
/// Width taken by every column except the title
const RESERVED_WIDTH: usize = 45;
const MIN_TITLE_WIDTH: usize = 20;
const REPO_WIDTH: usize = 20;

/// Rows of the list visible for a terminal `height`. Always at least one so
/// the selection stays on screen.
pub fn visible_rows(height: u16) -> usize {
    (height as usize).saturating_sub(CHROME_LINES).max(1)
}

/// Window of indices to draw, centred on `selected` when the list does not
/// fit, and clamped to `0..len`.
pub fn visible_range(len: usize, selected: usize, height: u16) -> Range<usize> {
    let rows = visible_rows(height);
    if len <= rows {
        return 0..len;
    }

    let start = selected.saturating_sub(rows / 2);
    let end = (start + rows).min(len);
    end.saturating_sub(rows)..end
}

pub fn title_width(width: u16) -> usize {
    (width as usize)
        .saturating_sub(RESERVED_WIDTH)
        .max(MIN_TITLE_WIDTH)
}

/// Cut `text` to `max` chars, ending in "..." when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

pub fn header() -> String {
    format!(
        "   {:<8} {:<REPO_WIDTH$} {:<10} {}",
        "Status", "Repository", "Type", "Title"
    )
}

pub fn row(
    notification: &Notification,
    index: usize,
    selected: bool,
    width: u16,
    theme: &Theme,
) -> Line<'static> {
    let icon_style = if notification.unread {
        theme.unread
    } else {
        theme.read
    };

    let line = Line::from(vec![
        Span::raw(format!("{:>2} ", index + 1)),
        Span::styled(notification.status_icon(), icon_style),
        Span::raw(format!(
            " {:<REPO_WIDTH$} {:<10} {}",
            truncate(&notification.repository, REPO_WIDTH),
            notification.subject_type.short_code(),
            truncate(&notification.title, title_width(width)),
        )),
    ]);

    if selected {
        line.style(theme.selected)
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::notification;
    use ratatui::style::Modifier;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn short_list_shows_everything() {
        assert_eq!(visible_range(5, 4, 24), 0..5);
        assert_eq!(visible_range(0, 0, 24), 0..0);
        assert_eq!(visible_range(16, 15, 24), 0..16);
    }

    #[test]
    fn long_list_centres_selection() {
        // 24 - 8 = 16 rows
        assert_eq!(visible_range(30, 0, 24), 0..16);
        assert_eq!(visible_range(30, 15, 24), 7..23);
        assert_eq!(visible_range(30, 29, 24), 14..30);
    }

    #[test]
    fn selection_always_visible() {
        for height in [0u16, 3, 8, 9, 12, 24, 50] {
            for selected in 0..40 {
                let range = visible_range(40, selected, height);
                assert!(range.contains(&selected), "h={} sel={}", height, selected);
                assert!(range.end <= 40);
                assert_eq!(range.len(), visible_rows(height).min(40));
            }
        }
    }

    #[test]
    fn tiny_terminal_shows_one_row() {
        assert_eq!(visible_rows(5), 1);
        assert_eq!(visible_range(10, 3, 5), 3..4);
    }

    #[test]
    fn title_width_has_floor() {
        assert_eq!(title_width(40), 20);
        assert_eq!(title_width(0), 20);
        assert_eq!(title_width(65), 20);
        assert_eq!(title_width(100), 55);
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("short", 20), "short");
        assert_eq!(truncate("exactly-twenty-chars", 20), "exactly-twenty-chars");
        assert_eq!(truncate("a-much-longer-repository/name", 20), "a-much-longer-rep...");
        assert_eq!(truncate("abcdef", 2), "...");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let title = "修正: ジョブキューのデッドロックを解消する長いタイトル";
        let cut = truncate(title, 10);
        assert_eq!(cut.chars().count(), 10);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn narrow_row_keeps_twenty_char_title() {
        let mut n = notification("1");
        n.title = "x".repeat(50);
        let line = row(&n, 0, false, 40, &Theme::default());
        let rendered = text(&line);
        assert!(rendered.ends_with(&format!("{}...", "x".repeat(17))));
    }

    #[test]
    fn row_columns() {
        let mut n = notification("1");
        n.repository = "some-organisation/with-a-long-repo".to_string();
        let line = row(&n, 2, false, 80, &Theme::default());
        assert_eq!(
            text(&line),
            format!(" 3 ● {:<20} {:<10} {}", "some-organisation...", "issue", "Issue 1")
        );
    }

    #[test]
    fn read_and_unread_icons_styled_differently() {
        let theme = Theme::default();
        let unread = row(&notification("1"), 0, false, 80, &theme);
        let mut n = notification("2");
        n.unread = false;
        let read = row(&n, 1, false, 80, &theme);

        assert_eq!(unread.spans[1].content, "●");
        assert_eq!(read.spans[1].content, "○");
        assert_eq!(unread.spans[1].style, theme.unread);
        assert_eq!(read.spans[1].style, theme.read);
    }

    #[test]
    fn only_selected_row_is_reversed() {
        let theme = Theme::default();
        let selected = row(&notification("1"), 0, true, 80, &theme);
        let plain = row(&notification("1"), 0, false, 80, &theme);
        assert!(selected.style.add_modifier.contains(Modifier::REVERSED));
        assert!(!plain.style.add_modifier.contains(Modifier::REVERSED));
        assert_eq!(text(&selected), text(&plain));
    }
}
