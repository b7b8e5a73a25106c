//! 统一错误处理
//!
//! 应用级错误类型，供装配层 (配置、数据库初始化) 和宿主进程使用。
//! 领域错误见 [`crate::projects::ProjectError`]，仓库错误见
//! [`crate::db::repository::RepoError`]。

use crate::projects::ProjectError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 资源不存在
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// 资源冲突
    #[error("Resource conflict: {0}")]
    Conflict(String),

    /// 验证失败
    #[error("Validation failed: {0}")]
    Validation(String),

    /// 数据库错误
    #[error("Database error: {0}")]
    Database(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    Internal(String),
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<ProjectError> for AppError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::NotFound(msg) => AppError::NotFound(msg),
            ProjectError::Validation(msg) => AppError::Validation(msg),
            ProjectError::ReferenceResolution(ids) => {
                AppError::Validation(format!("Unresolved employee ids: {}", ids.join(", ")))
            }
            ProjectError::AlreadyCompleted(code) => {
                AppError::Conflict(format!("Project already completed: {code}"))
            }
            ProjectError::ConcurrentModification(msg) => AppError::Conflict(msg),
            ProjectError::Duplicate(msg) => AppError::Conflict(msg),
            ProjectError::Database(msg) => {
                tracing::error!(target: "database", error = %msg, "Database error occurred");
                AppError::Database(msg)
            }
        }
    }
}

/// Application-level Result type
pub type AppResult<T> = Result<T, AppError>;
