//! Project Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::EmployeeBrief;
use super::serde_helpers;

/// Project ID type
pub type ProjectId = RecordId;

/// Project lifecycle status
///
/// One-way: `Upcoming -> Current -> Completed`. `Completed` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Upcoming,
    Current,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Upcoming => "upcoming",
            ProjectStatus::Current => "current",
            ProjectStatus::Completed => "completed",
        }
    }

    /// Terminal states admit no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProjectStatus::Completed)
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project record
///
/// `assigned_employees` has set semantics and is only written together with
/// the employee-side reference arrays (see `ProjectRepository`). `version`
/// is the optimistic concurrency stamp, incremented on every write; edits
/// carrying a stale version are rejected. `amount` is the completion reward
/// and is fixed after creation for ledger purposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<ProjectId>,
    /// Caller-facing unique identifier (e.g. "PRJ-2031")
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: ProjectStatus,
    #[serde(default, with = "serde_helpers::vec_record_id")]
    pub assigned_employees: Vec<RecordId>,
    pub amount: f64,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub version: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Create project payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreate {
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub amount: f64,
    pub tasks: Option<Vec<String>>,
    pub deadline: Option<String>,
    pub tags: Option<Vec<String>>,
    /// External employee ids; the full desired assignment set
    #[serde(default)]
    pub assigned_user_ids: Vec<String>,
}

/// Edit project payload
///
/// `assigned_user_ids`, when present, is a full replacement list, not a
/// delta. `version` must match the version the caller read; a mismatch is
/// rejected as a concurrent modification. `amount` and `status` are
/// deliberately absent: the reward is fixed at creation and status only
/// moves through the named workflow transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_user_ids: Option<Vec<String>>,
    pub version: i64,
}

impl Default for ProjectUpdate {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            tasks: None,
            deadline: None,
            tags: None,
            assigned_user_ids: None,
            version: 1,
        }
    }
}

/// Project with assignees expanded for display
///
/// Stored relationship fields hold raw record ids; expansion to a display
/// object happens only here, at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    #[serde(default)]
    pub assignees: Vec<EmployeeBrief>,
}
