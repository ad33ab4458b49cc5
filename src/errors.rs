use axum::http::StatusCode;
use thiserror::Error;

/// Per-operation failure taxonomy. Handlers never panic and never let a raw
/// fault cross the tool boundary; everything maps onto one of these, and the
/// human-readable rendering happens only at the wire.
#[derive(Debug, Error)]
pub enum OpError {
    #[error("Access denied: Path escapes workspace.")]
    PathEscape,
    #[error("Error: Refuse to delete workspace root.")]
    RootDeletion,
    /// Existence required and the target is absent; `entity` is the caller-facing
    /// kind word ("File", "Directory", "CSV file").
    #[error("Error: {entity} '{path}' not found.")]
    NotFound { entity: &'static str, path: String },
    /// The delete operations phrase absence differently.
    #[error("Error: '{path}' does not exist.")]
    Missing { path: String },
    /// Target exists but is the wrong kind for the operation; `detail` finishes
    /// the sentence ("is a directory, not a file.", "is not a directory.", ...).
    #[error("Error: '{path}' {detail}")]
    WrongType { path: String, detail: &'static str },
    #[error("Error: Directory not empty or cannot remove without recursive=True. Detail: {detail}")]
    NotEmpty { detail: String },
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("invalid params: {0}")]
    InvalidParams(String),
    #[error("An error occurred: {0}")]
    Io(String),
}

impl From<std::io::Error> for OpError {
    fn from(e: std::io::Error) -> Self {
        OpError::Io(e.to_string())
    }
}

impl OpError {
    pub fn code(&self) -> &'static str {
        match self {
            OpError::PathEscape => "PathEscape",
            OpError::RootDeletion => "RootDeletionRefused",
            OpError::NotFound { .. } | OpError::Missing { .. } => "NotFound",
            OpError::WrongType { .. } => "WrongType",
            OpError::NotEmpty { .. } => "NotEmpty",
            OpError::UnknownTool(_) => "UnknownTool",
            OpError::InvalidParams(_) => "InvalidParams",
            OpError::Io(_) => "IoFault",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            OpError::PathEscape | OpError::RootDeletion => StatusCode::FORBIDDEN,
            OpError::NotFound { .. } | OpError::Missing { .. } | OpError::UnknownTool(_) => StatusCode::NOT_FOUND,
            OpError::WrongType { .. } | OpError::InvalidParams(_) => StatusCode::BAD_REQUEST,
            OpError::NotEmpty { .. } => StatusCode::CONFLICT,
            OpError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type OpResult<T> = Result<T, OpError>;
