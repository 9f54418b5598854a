use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("GitHub CLI ({0}) is not installed")]
    ToolMissing(String),

    #[error("not authenticated with GitHub. Run: gh auth login")]
    NotAuthenticated,

    #[error("API error: {0}")]
    Api(String),

    #[error("failed to parse notifications: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TriageError>;
