use thiserror::Error;

use crate::db::repository::RepoError;

/// Project domain errors
///
/// All variants are recoverable at the caller boundary and map onto request
/// layer failures; none is fatal to the process. A failed operation leaves
/// the store either fully applied or fully unapplied.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    /// One or more external assignment ids did not resolve to an employee.
    /// Carries the offending ids so the caller can surface them; the whole
    /// operation is rejected rather than silently dropping entries.
    #[error("Unresolved employee ids: {}", .0.join(", "))]
    ReferenceResolution(Vec<String>),

    /// Duplicate completion attempt. Deliberately benign: it signals that
    /// the caller's request was already applied, and nothing was mutated.
    #[error("Project already completed: {0}")]
    AlreadyCompleted(String),

    #[error("Concurrent modification: {0}")]
    ConcurrentModification(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<RepoError> for ProjectError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => ProjectError::NotFound(msg),
            RepoError::Duplicate(msg) => ProjectError::Duplicate(msg),
            RepoError::Conflict(msg) => ProjectError::ConcurrentModification(msg),
            RepoError::Validation(msg) => ProjectError::Validation(msg),
            RepoError::Database(msg) => ProjectError::Database(msg),
        }
    }
}

/// Result type for project domain operations
pub type ProjectResult<T> = Result<T, ProjectError>;
