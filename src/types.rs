use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Kind of thing a notification is about, from `subject.type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SubjectType {
    PullRequest,
    Issue,
    Release,
    Discussion,
    #[serde(other)]
    Other,
}

impl SubjectType {
    /// Short code shown in the type column
    pub fn short_code(&self) -> &'static str {
        match self {
            SubjectType::PullRequest => "pr",
            SubjectType::Issue => "issue",
            SubjectType::Release => "release",
            SubjectType::Discussion => "discuss",
            SubjectType::Other => "other",
        }
    }
}

/// One notification thread. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub unread: bool,
    #[allow(dead_code)]
    pub reason: String,
    /// Full name, `owner/repo`
    pub repository: String,
    pub subject_type: SubjectType,
    pub title: String,
    pub url: String,
    #[allow(dead_code)]
    pub updated_at: DateTime<Utc>,
}

impl Notification {
    pub fn status_icon(&self) -> &'static str {
        if self.unread {
            "●"
        } else {
            "○"
        }
    }
}
