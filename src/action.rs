use crate::types::Notification;

/// Everything the reducer reacts to: mapped key presses, terminal resizes
/// and the results of background commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Init,
    Quit,
    Resize(u16, u16),
    ScrollUp,
    ScrollDown,
    Open,
    MarkRead,
    Refresh,
    /// Reserved key, not implemented yet
    ShowSummary,

    // Command results
    FetchCompleted(Vec<Notification>),
    FetchFailed(String),
    MarkReadCompleted(String),
    MarkReadFailed(String),
    OpenCompleted,
    OpenFailed(String),

    None,
}

/// Background work requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchNotifications,
    MarkRead(String),
    Open(Notification),
}
