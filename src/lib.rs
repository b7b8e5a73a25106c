//! Crewtrack Core - employee / project tracking backend core
//!
//! # Architecture Overview
//!
//! This crate is the consistency and workflow core of the crewtrack
//! application. It keeps Employee and Project records mutually consistent as
//! assignments change, and drives the one-way completion workflow that
//! credits employee earnings exactly once per completed assignment.
//!
//! The HTTP request layer, authentication and payout integrations are
//! external consumers of this crate; they talk to [`ProjectService`] and the
//! repositories and never touch relationship fields directly.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── core/          # 配置、状态 (Config, AppState)
//! ├── db/            # 数据库层 (embedded SurrealDB, models, repositories)
//! ├── projects/      # 项目域: assignment diff, reference sync, completion
//! └── utils/         # 工具函数 (errors, logger, validation)
//! ```

pub mod core;
pub mod db;
pub mod projects;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{AppState, Config, setup_environment};
pub use db::DbService;
pub use db::models::{Employee, EmployeeCreate, Project, ProjectCreate, ProjectStatus, ProjectUpdate};
pub use db::repository::{EmployeeRepository, ProjectRepository};
pub use projects::{CompletionPolicy, ProjectError, ProjectService};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
