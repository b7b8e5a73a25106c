//! Projects Domain - assignment consistency and completion workflow
//!
//! This module owns the hard part of the application: Employees and Projects
//! reference each other with no single-owner relationship, edits replace the
//! whole assignment list, and completion must credit each assigned
//! employee's ledger exactly once.
//!
//! # Operation Flow
//!
//! ```text
//! ProjectService::edit_project(id, update)
//!     ├─ 1. Load project, reject terminal status
//!     ├─ 2. Validate patch fields
//!     ├─ 3. Resolve external employee ids (hard error on unknowns)
//!     ├─ 4. Compute assignment diff (added / removed / desired)
//!     ├─ 5. Evaluate auto-advance transition
//!     └─ 6. ProjectRepository::sync_assignments
//!            └─ one transaction: version check, employee-side removals,
//!               guarded employee-side inserts, project write
//! ```
//!
//! Completion follows the same shape with the ledger credit folded into the
//! transaction (see `ProjectRepository::complete`).

pub mod assignment;
mod error;
pub mod service;
pub mod workflow;

pub use assignment::AssignmentDiff;
pub use error::{ProjectError, ProjectResult};
pub use service::ProjectService;
pub use workflow::CompletionPolicy;
