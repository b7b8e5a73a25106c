//! Database Models

// Serde helpers
pub mod serde_helpers;

// Staff
pub mod employee;

// Projects
pub mod project;

// Re-exports
pub use employee::{Employee, EmployeeBrief, EmployeeCreate, EmployeeId};
pub use project::{
    Project, ProjectCreate, ProjectDetail, ProjectId, ProjectStatus, ProjectUpdate,
};
