use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Notification, SubjectType};

/// Access to the remote notification service.
///
/// Every call may fail; callers turn failures into messages rather than
/// propagating them.
#[async_trait]
pub trait Gateway: Send + Sync + std::fmt::Debug {
    /// All currently available notifications, pages flattened in order.
    async fn fetch_notifications(&self) -> Result<Vec<Notification>>;
    async fn mark_read(&self, id: &str) -> Result<()>;
    async fn open_external(&self, notification: &Notification) -> Result<()>;
}

/// What `open_external` should show for a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenTarget {
    Issue { repo: String, number: String },
    PullRequest { repo: String, number: String },
    Repository { repo: String },
}

impl OpenTarget {
    /// Pick a target from the subject type and the number at the end of the
    /// subject URL. Anything without a number falls back to the repository.
    pub fn resolve(notification: &Notification) -> Self {
        let repo = notification.repository.clone();
        match (notification.subject_type, trailing_number(&notification.url)) {
            (SubjectType::Issue, Some(number)) => OpenTarget::Issue { repo, number },
            (SubjectType::PullRequest, Some(number)) => OpenTarget::PullRequest { repo, number },
            _ => OpenTarget::Repository { repo },
        }
    }
}

/// Last path segment of `url` if it is all ASCII digits.
pub fn trailing_number(url: &str) -> Option<String> {
    let segment = url.trim_end_matches('/').rsplit('/').next()?;
    if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
        Some(segment.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn notification(subject_type: SubjectType, url: &str) -> Notification {
        Notification {
            id: "1".to_string(),
            unread: true,
            reason: "subscribed".to_string(),
            repository: "rust-lang/rust".to_string(),
            subject_type,
            title: "title".to_string(),
            url: url.to_string(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn issue_with_number_opens_issue() {
        let n = notification(
            SubjectType::Issue,
            "https://api.github.com/repos/rust-lang/rust/issues/42",
        );
        assert_eq!(
            OpenTarget::resolve(&n),
            OpenTarget::Issue {
                repo: "rust-lang/rust".to_string(),
                number: "42".to_string(),
            }
        );
    }

    #[test]
    fn pull_request_with_number_opens_pr() {
        let n = notification(
            SubjectType::PullRequest,
            "https://api.github.com/repos/rust-lang/rust/pulls/1337",
        );
        assert_eq!(
            OpenTarget::resolve(&n),
            OpenTarget::PullRequest {
                repo: "rust-lang/rust".to_string(),
                number: "1337".to_string(),
            }
        );
    }

    #[test]
    fn non_numeric_segment_falls_back_to_repo() {
        let n = notification(
            SubjectType::Issue,
            "https://api.github.com/repos/rust-lang/rust/issues/latest",
        );
        assert_eq!(
            OpenTarget::resolve(&n),
            OpenTarget::Repository {
                repo: "rust-lang/rust".to_string()
            }
        );
    }

    #[test]
    fn empty_url_falls_back_to_repo() {
        let n = notification(SubjectType::PullRequest, "");
        assert!(matches!(OpenTarget::resolve(&n), OpenTarget::Repository { .. }));
    }

    #[test]
    fn release_always_opens_repo() {
        let n = notification(
            SubjectType::Release,
            "https://api.github.com/repos/rust-lang/rust/releases/123456",
        );
        assert!(matches!(OpenTarget::resolve(&n), OpenTarget::Repository { .. }));
    }

    #[test]
    fn trailing_number_variants() {
        assert_eq!(trailing_number(".../42"), Some("42".to_string()));
        assert_eq!(trailing_number("https://x/issues/7/"), Some("7".to_string()));
        assert_eq!(trailing_number("https://x/issues/7a"), None);
        assert_eq!(trailing_number("42"), Some("42".to_string()));
        assert_eq!(trailing_number(""), None);
    }
}
