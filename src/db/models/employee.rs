//! Employee Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Employee ID type
pub type EmployeeId = RecordId;

/// Employee record
///
/// `active_projects` and `completed_projects` hold project record ids with
/// set semantics and are disjoint at all times. They are written exclusively
/// by the project repository's transactional methods, never by callers.
/// `balance` is the earnings ledger: credited only by project completion,
/// never decreased by this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<EmployeeId>,
    /// Caller-facing unique identifier (e.g. "emp001")
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default, with = "serde_helpers::vec_record_id")]
    pub active_projects: Vec<RecordId>,
    #[serde(default, with = "serde_helpers::vec_record_id")]
    pub completed_projects: Vec<RecordId>,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_role() -> String {
    "employee".to_string()
}

/// Create employee payload (registration glue)
///
/// Credentials and course enrollment are handled by external collaborators;
/// relationship fields always start empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub user_id: String,
    pub name: String,
    pub email: Option<String>,
    pub role: Option<String>,
    pub tags: Option<Vec<String>>,
    pub badges: Option<Vec<String>>,
}

/// Boundary view of an assigned employee (id expanded for display)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeBrief {
    pub id: String,
    pub user_id: String,
    pub name: String,
}
