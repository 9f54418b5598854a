use crossterm::event::{KeyCode, KeyEvent};

use crate::action::{Action, Command};
use crate::event::Event;
use crate::types::Notification;

pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// Application state. Only `update` produces new values of it.
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    pub notifications: Vec<Notification>,
    pub selected: usize,
    pub loading: bool,
    pub error: Option<String>,
    pub status: String,
    pub width: u16,
    pub height: u16,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
            selected: 0,
            loading: true,
            error: None,
            status: "Loading notifications...".to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            should_quit: false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.notifications.get(self.selected)
    }

    pub fn handle_event(&self, event: Event) -> Action {
        if event.is_quit() {
            return Action::Quit;
        }
        match event {
            Event::Init => Action::Init,
            Event::Key(key) => self.handle_key(key),
            Event::Resize(width, height) => Action::Resize(width, height),
            Event::Render => Action::None,
        }
    }

    fn handle_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
            KeyCode::Enter => Action::Open,
            KeyCode::Char('r') => Action::MarkRead,
            KeyCode::Char('f') | KeyCode::F(5) => Action::Refresh,
            KeyCode::Tab => Action::ShowSummary,
            _ => Action::None,
        }
    }

    /// Apply one action, returning the next state and any background work
    /// it asks for.
    pub fn update(mut self, action: Action) -> (Self, Option<Command>) {
        let command = match action {
            Action::Init => Some(Command::FetchNotifications),
            Action::Quit => {
                self.should_quit = true;
                None
            }
            Action::Resize(width, height) => {
                self.width = width;
                self.height = height;
                None
            }
            Action::ScrollUp => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
                None
            }
            Action::ScrollDown => {
                if self.selected + 1 < self.notifications.len() {
                    self.selected += 1;
                }
                None
            }
            Action::Open => self.current().cloned().map(Command::Open),
            Action::MarkRead => self
                .current()
                .map(|n| Command::MarkRead(n.id.clone())),
            Action::Refresh => {
                self.loading = true;
                self.status = "Refreshing notifications...".to_string();
                Some(Command::FetchNotifications)
            }
            Action::ShowSummary => {
                self.status = "Summary view coming soon...".to_string();
                None
            }

            Action::FetchCompleted(notifications) => {
                self.status = if notifications.is_empty() {
                    "No notifications found".to_string()
                } else {
                    format!("Loaded {} notifications", notifications.len())
                };
                self.notifications = notifications;
                self.selected = clamp_index(self.selected, self.notifications.len());
                self.loading = false;
                self.error = None;
                None
            }
            Action::FetchFailed(err) => {
                self.loading = false;
                self.fail(err);
                None
            }
            Action::MarkReadCompleted(id) => {
                self.notifications = std::mem::take(&mut self.notifications)
                    .into_iter()
                    .filter(|n| n.id != id)
                    .collect();
                self.selected = clamp_index(self.selected, self.notifications.len());
                self.status = "Notification marked as read".to_string();
                None
            }
            // Pessimistic: the item stays until the remote side confirms.
            Action::MarkReadFailed(err) => {
                self.fail(err);
                None
            }
            Action::OpenCompleted => {
                self.status = "Opened in browser".to_string();
                None
            }
            Action::OpenFailed(err) => {
                self.fail(err);
                None
            }
            Action::None => None,
        };

        (self, command)
    }

    fn fail(&mut self, err: String) {
        self.status = format!("Error: {}", err);
        self.error = Some(err);
    }
}

/// Largest valid index at or below `index` for a list of `len` items, or 0.
pub fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}
