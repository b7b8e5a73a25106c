//! Repository Module
//!
//! CRUD and transactional multi-record operations on SurrealDB tables.
//!
//! The project repository is the only writer of the Employee<->Project
//! relationship fields; every mutation that touches both sides runs inside a
//! single database transaction so partial results are never committed.

pub mod employee;
pub mod project;

// Re-exports
pub use employee::EmployeeRepository;
pub use project::ProjectRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// Guard sentinels thrown inside transactions. A THROW aborts the whole
// transaction; the sentinel is matched back out of the error text because
// the SDK surfaces thrown values as message strings.
pub(crate) const THROW_NOT_FOUND: &str = "project_not_found";
pub(crate) const THROW_ALREADY_COMPLETED: &str = "project_already_completed";
pub(crate) const THROW_VERSION_CONFLICT: &str = "project_version_conflict";

/// Classify a failed transaction back into a repository error
///
/// Every statement in a cancelled transaction reports an error; only the
/// throwing statement carries the sentinel, so all of them are scanned.
pub(crate) fn classify_tx_errors(
    errors: std::collections::HashMap<usize, surrealdb::Error>,
    id: &str,
) -> RepoError {
    let mut fallback = None;
    for (_, err) in errors {
        let text = err.to_string();
        if text.contains(THROW_NOT_FOUND) {
            return RepoError::NotFound(format!("Project {} not found", id));
        }
        if text.contains(THROW_ALREADY_COMPLETED) {
            return RepoError::Conflict(format!("Project {} already completed", id));
        }
        if text.contains(THROW_VERSION_CONFLICT) {
            return RepoError::Conflict(format!("Project {} modified concurrently", id));
        }
        fallback = Some(text);
    }
    RepoError::Database(fallback.unwrap_or_else(|| "Transaction failed".to_string()))
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
