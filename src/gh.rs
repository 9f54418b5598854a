use std::io::ErrorKind;
use std::process::Output;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tokio::process::Command;

use crate::error::{Result, TriageError};
use crate::gateway::{Gateway, OpenTarget};
use crate::types::{Notification, SubjectType};

/// Gateway backed by the GitHub CLI, which owns authentication.
pub struct GhCli {
    binary: String,
}

impl std::fmt::Debug for GhCli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GhCli")
            .field("binary", &self.binary)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct RawNotification {
    id: String,
    unread: bool,
    reason: String,
    repository: RawRepository,
    subject: RawSubject,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct RawRepository {
    full_name: String,
}

#[derive(Debug, Deserialize)]
struct RawSubject {
    #[serde(rename = "type")]
    kind: SubjectType,
    title: String,
    url: Option<String>,
}

impl From<RawNotification> for Notification {
    fn from(raw: RawNotification) -> Self {
        Notification {
            id: raw.id,
            unread: raw.unread,
            reason: raw.reason,
            repository: raw.repository.full_name,
            subject_type: raw.subject.kind,
            title: raw.subject.title,
            url: raw.subject.url.unwrap_or_default(),
            updated_at: raw.updated_at,
        }
    }
}

/// Parse `gh api --paginate` output. Each page is a JSON array and pages are
/// written back to back, so read a stream of arrays and flatten them.
pub fn parse_notifications(bytes: &[u8]) -> Result<Vec<Notification>> {
    let mut notifications = Vec::new();
    let pages = serde_json::Deserializer::from_slice(bytes).into_iter::<Vec<RawNotification>>();
    for page in pages {
        notifications.extend(page?.into_iter().map(Notification::from));
    }
    Ok(notifications)
}

impl OpenTarget {
    /// Arguments for `gh` that open this target in the browser
    pub fn gh_args(&self) -> Vec<String> {
        let args: Vec<&str> = match self {
            OpenTarget::Issue { repo, number } => {
                vec!["issue", "view", number.as_str(), "-R", repo.as_str(), "--web"]
            }
            OpenTarget::PullRequest { repo, number } => {
                vec!["pr", "view", number.as_str(), "-R", repo.as_str(), "--web"]
            }
            OpenTarget::Repository { repo } => vec!["repo", "view", repo.as_str(), "--web"],
        };
        args.into_iter().map(String::from).collect()
    }
}

fn mark_read_args(id: &str) -> Vec<String> {
    vec![
        "api".to_string(),
        "--method".to_string(),
        "PATCH".to_string(),
        "-H".to_string(),
        "Accept: application/vnd.github+json".to_string(),
        "-H".to_string(),
        "X-GitHub-Api-Version: 2022-11-28".to_string(),
        format!("/notifications/threads/{}", id),
    ]
}

impl GhCli {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Verify the CLI exists and has a logged-in account.
    pub async fn check(&self) -> Result<()> {
        match Command::new(&self.binary).arg("--version").output().await {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(TriageError::ToolMissing(self.binary.clone()));
            }
            Err(e) => return Err(e.into()),
        }

        let status = Command::new(&self.binary)
            .args(["auth", "status"])
            .output()
            .await?
            .status;
        if !status.success() {
            return Err(TriageError::NotAuthenticated);
        }

        tracing::debug!(binary = %self.binary, "GitHub CLI available and authenticated");
        Ok(())
    }

    async fn run<S: AsRef<str>>(&self, args: &[S]) -> Result<Output> {
        let output = Command::new(&self.binary)
            .args(args.iter().map(|a| a.as_ref()))
            .output()
            .await?;
        if output.status.success() {
            return Ok(output);
        }

        let command = std::iter::once(self.binary.as_str())
            .chain(args.iter().map(|a| a.as_ref()))
            .collect::<Vec<_>>()
            .join(" ");
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(TriageError::Api(if stderr.is_empty() {
            format!("`{}` {}", command, output.status)
        } else {
            format!("`{}` {}: {}", command, output.status, stderr)
        }))
    }
}

#[async_trait]
impl Gateway for GhCli {
    async fn fetch_notifications(&self) -> Result<Vec<Notification>> {
        let output = self.run(&["api", "notifications", "--paginate"]).await?;
        let notifications = parse_notifications(&output.stdout)?;
        tracing::debug!(count = notifications.len(), "fetched notifications");
        Ok(notifications)
    }

    async fn mark_read(&self, id: &str) -> Result<()> {
        self.run(&mark_read_args(id)).await?;
        Ok(())
    }

    async fn open_external(&self, notification: &Notification) -> Result<()> {
        let target = OpenTarget::resolve(notification);
        tracing::debug!(?target, "opening in browser");
        self.run(&target.gh_args()).await?;
        Ok(())
    }
}
