//! Project Service - the operation surface consumed by the request layer
//!
//! Orchestrates validate -> resolve -> diff -> synchronize -> workflow for
//! every project operation. All relationship writes go through the
//! repository's transactional methods; the service itself holds no state
//! beyond the database handle and the workflow policy.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::assignment::{self, AssignmentDiff};
use super::error::{ProjectError, ProjectResult};
use super::workflow::{self, CompletionPolicy};
use crate::db::models::{
    Project, ProjectCreate, ProjectDetail, ProjectStatus, ProjectUpdate,
};
use crate::db::repository::{EmployeeRepository, ProjectRepository, RepoError};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};

#[derive(Clone)]
pub struct ProjectService {
    projects: ProjectRepository,
    employees: EmployeeRepository,
    policy: CompletionPolicy,
}

impl ProjectService {
    pub fn new(db: Surreal<Db>, policy: CompletionPolicy) -> Self {
        Self {
            projects: ProjectRepository::new(db.clone()),
            employees: EmployeeRepository::new(db),
            policy,
        }
    }

    /// Create a project, optionally with an initial assignment list
    ///
    /// External assignment ids must all resolve; unknown ids reject the
    /// whole request. Initial status follows the workflow policy.
    pub async fn create_project(&self, data: ProjectCreate) -> ProjectResult<Project> {
        validate_required_text(&data.title, "title", MAX_NAME_LEN)?;
        validate_required_text(&data.code, "code", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&data.description, "description", MAX_NOTE_LEN)?;
        validate_amount(data.amount)?;

        if self.projects.find_by_code(&data.code).await?.is_some() {
            return Err(ProjectError::Duplicate(format!(
                "Project with code '{}' already exists",
                data.code
            )));
        }

        let assigned = assignment::resolve_user_ids(&self.employees, &data.assigned_user_ids).await?;
        let status = workflow::initial_status(self.policy, !assigned.is_empty());

        let project = Project {
            id: None,
            code: data.code,
            title: data.title,
            description: data.description,
            status,
            assigned_employees: Vec::new(),
            amount: data.amount,
            tasks: data.tasks.unwrap_or_default(),
            deadline: data.deadline,
            tags: data.tags.unwrap_or_default(),
            version: 1,
            created_at: None,
            updated_at: None,
        };

        let created = self
            .projects
            .create_with_assignments(project, assigned)
            .await?;

        tracing::info!(
            code = %created.code,
            status = %created.status,
            assignees = created.assigned_employees.len(),
            "Project created"
        );
        Ok(created)
    }

    /// Edit a project's fields and/or replace its assignment list
    ///
    /// `update.assigned_user_ids`, when present, is the complete desired
    /// set. The diff against the current set decides which employees gain
    /// or lose the project reference; employees in both sets are untouched.
    /// A stale `update.version` fails with `ConcurrentModification` and
    /// changes nothing.
    pub async fn edit_project(&self, id: &str, update: ProjectUpdate) -> ProjectResult<Project> {
        validate_optional_text(&update.title, "title", MAX_NAME_LEN)?;
        validate_optional_text(&update.description, "description", MAX_NOTE_LEN)?;
        if let Some(ref title) = update.title
            && title.trim().is_empty()
        {
            return Err(ProjectError::Validation("title must not be empty".into()));
        }

        let current = self
            .projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProjectError::NotFound(format!("Project {} not found", id)))?;

        // Terminal state: completed projects are immutable
        if current.status.is_terminal() {
            return Err(ProjectError::AlreadyCompleted(current.code));
        }

        let diff = match &update.assigned_user_ids {
            Some(user_ids) => {
                let desired = assignment::resolve_user_ids(&self.employees, user_ids).await?;
                AssignmentDiff::between(&current.assigned_employees, desired)
            }
            None => AssignmentDiff::unchanged(&current.assigned_employees),
        };

        let new_status = workflow::auto_advance(current.status, !diff.desired.is_empty());

        let updated = self
            .projects
            .sync_assignments(id, &diff, update, new_status)
            .await?;

        tracing::info!(
            code = %updated.code,
            added = diff.added.len(),
            removed = diff.removed.len(),
            status = %updated.status,
            "Project updated"
        );
        Ok(updated)
    }

    /// Complete a project and credit every assigned employee exactly once
    ///
    /// Idempotent at the caller boundary: a duplicate call fails with
    /// `AlreadyCompleted` and mutates nothing.
    pub async fn complete_project(&self, id: &str) -> ProjectResult<Project> {
        let completed = self.projects.complete(id).await.map_err(|e| match e {
            RepoError::Conflict(_) => ProjectError::AlreadyCompleted(id.to_string()),
            other => other.into(),
        })?;

        tracing::info!(
            code = %completed.code,
            amount = completed.amount,
            credited = completed.assigned_employees.len(),
            "Project completed, ledger credited"
        );
        Ok(completed)
    }

    /// Delete a project and purge its references from all employees
    ///
    /// Balances already credited by completion are not clawed back.
    pub async fn delete_project(&self, id: &str) -> ProjectResult<()> {
        self.projects.delete_with_references(id).await?;
        tracing::info!(project = %id, "Project deleted, references purged");
        Ok(())
    }

    /// List projects, optionally filtered by status
    ///
    /// No filter returns the non-completed board (upcoming + current).
    pub async fn list_projects(
        &self,
        status: Option<ProjectStatus>,
    ) -> ProjectResult<Vec<Project>> {
        Ok(self.projects.find_all(status).await?)
    }

    /// Project detail with assignees expanded for display
    pub async fn get_project(&self, id: &str) -> ProjectResult<ProjectDetail> {
        self.projects
            .find_detail(id)
            .await?
            .ok_or_else(|| ProjectError::NotFound(format!("Project {} not found", id)))
    }

    /// Non-completed projects assigned to the given employee
    pub async fn list_for_employee(&self, user_id: &str) -> ProjectResult<Vec<Project>> {
        let employee = self
            .employees
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| ProjectError::NotFound(format!("Employee {} not found", user_id)))?;

        Ok(self
            .projects
            .find_active_by_ids(employee.active_projects)
            .await?)
    }
}

fn validate_amount(amount: f64) -> ProjectResult<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ProjectError::Validation(
            "amount must be a non-negative number".into(),
        ));
    }
    Ok(())
}
