//! Project Repository
//!
//! Owner of the Employee<->Project relationship. Every method that touches
//! both sides of the relationship runs as a single SurrealDB transaction:
//! a failed operation commits nothing, and each sub-step (guarded set-insert,
//! set-remove) is idempotent so a retried operation converges.

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{
    BaseRepository, RepoError, RepoResult, THROW_ALREADY_COMPLETED, THROW_NOT_FOUND,
    THROW_VERSION_CONFLICT, classify_tx_errors,
};
use crate::db::models::{Project, ProjectDetail, ProjectStatus, ProjectUpdate};
use crate::projects::assignment::AssignmentDiff;
use crate::utils::now_rfc3339;

#[derive(Clone)]
pub struct ProjectRepository {
    base: BaseRepository,
}

impl ProjectRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find project by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Project>> {
        let record_id = parse_project_id(id)?;
        let project: Option<Project> = self.base.db().select(record_id).await?;
        Ok(project)
    }

    /// Find project by external code
    pub async fn find_by_code(&self, code: &str) -> RepoResult<Option<Project>> {
        let code_owned = code.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM project WHERE code = $code LIMIT 1")
            .bind(("code", code_owned))
            .await?;
        let projects: Vec<Project> = result.take(0)?;
        Ok(projects.into_iter().next())
    }

    /// List projects, optionally filtered by status
    ///
    /// Without a filter this returns the non-completed statuses (the listing
    /// the original board shows); pass an explicit status to override.
    pub async fn find_all(&self, status: Option<ProjectStatus>) -> RepoResult<Vec<Project>> {
        let mut result = match status {
            Some(status) => {
                self.base
                    .db()
                    .query("SELECT * FROM project WHERE status = $status ORDER BY created_at")
                    .bind(("status", status))
                    .await?
            }
            None => {
                self.base
                    .db()
                    .query("SELECT * FROM project WHERE status != 'completed' ORDER BY created_at")
                    .await?
            }
        };
        let projects: Vec<Project> = result.take(0)?;
        Ok(projects)
    }

    /// List non-completed projects among the given ids
    pub async fn find_active_by_ids(&self, ids: Vec<RecordId>) -> RepoResult<Vec<Project>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM project WHERE id INSIDE $ids AND status != 'completed' ORDER BY created_at",
            )
            .bind(("ids", ids))
            .await?;
        let projects: Vec<Project> = result.take(0)?;
        Ok(projects)
    }

    /// Project with assignees expanded for display
    pub async fn find_detail(&self, id: &str) -> RepoResult<Option<ProjectDetail>> {
        let record_id = parse_project_id(id)?;
        let mut result = self
            .base
            .db()
            .query(
                r#"SELECT *,
                    (
                        SELECT <string>id AS id, user_id, name
                        FROM employee
                        WHERE id INSIDE $parent.assigned_employees
                        ORDER BY name
                    ) AS assignees
                FROM project WHERE id = $project"#,
            )
            .bind(("project", record_id))
            .await?;
        let details: Vec<ProjectDetail> = result.take(0)?;
        Ok(details.into_iter().next())
    }

    /// Create a project and insert the project reference into every assigned
    /// employee's active set, atomically.
    ///
    /// `assigned` must hold resolved internal ids. The employee-side insert
    /// is guarded so it never creates a second entry.
    pub async fn create_with_assignments(
        &self,
        data: Project,
        assigned: Vec<RecordId>,
    ) -> RepoResult<Project> {
        let now = now_rfc3339();
        let mut result = self
            .base
            .db()
            .query(
                r#"BEGIN TRANSACTION;
                LET $proj = (CREATE ONLY project SET
                    code = $code,
                    title = $title,
                    description = $description,
                    status = $status,
                    assigned_employees = $assigned,
                    amount = $amount,
                    tasks = $tasks,
                    deadline = $deadline,
                    tags = $tags,
                    version = 1,
                    created_at = $now,
                    updated_at = $now);
                UPDATE employee SET
                    active_projects += $proj.id,
                    updated_at = $now
                    WHERE id INSIDE $assigned AND $proj.id NOT INSIDE active_projects;
                RETURN $proj;
                COMMIT TRANSACTION;"#,
            )
            .bind(("code", data.code))
            .bind(("title", data.title))
            .bind(("description", data.description))
            .bind(("status", data.status))
            .bind(("assigned", assigned))
            .bind(("amount", data.amount))
            .bind(("tasks", data.tasks))
            .bind(("deadline", data.deadline))
            .bind(("tags", data.tags))
            .bind(("now", now))
            .await?;

        let errors = result.take_errors();
        if !errors.is_empty() {
            return Err(classify_tx_errors(errors, "new"));
        }
        let last = result.num_statements() - 1;
        let created: Option<Project> = result.take(last)?;
        created.ok_or_else(|| RepoError::Database("Failed to create project".to_string()))
    }

    /// Apply an assignment diff and a field patch to a project, atomically.
    ///
    /// This is the reference synchronizer: removals first (idempotent
    /// set-remove), then guarded set-inserts, then the project write with
    /// the full desired set. Employees in neither set are untouched. The
    /// version stamp is checked inside the transaction; a mismatch aborts
    /// everything with a conflict.
    pub async fn sync_assignments(
        &self,
        id: &str,
        diff: &AssignmentDiff,
        patch: ProjectUpdate,
        new_status: Option<ProjectStatus>,
    ) -> RepoResult<Project> {
        let record_id = parse_project_id(id)?;
        let now = now_rfc3339();
        let mut result = self
            .base
            .db()
            .query(format!(
                r#"BEGIN TRANSACTION;
                LET $proj = (SELECT * FROM ONLY $project);
                IF $proj IS NONE {{ THROW '{THROW_NOT_FOUND}' }};
                IF $proj.version != $version {{ THROW '{THROW_VERSION_CONFLICT}' }};
                UPDATE employee SET
                    active_projects -= $project,
                    updated_at = $now
                    WHERE id INSIDE $removed;
                UPDATE employee SET
                    active_projects += $project,
                    updated_at = $now
                    WHERE id INSIDE $added AND $project NOT INSIDE active_projects;
                UPDATE ONLY $project SET
                    title = $title OR title,
                    description = $description OR description,
                    tasks = $tasks OR tasks,
                    deadline = $deadline OR deadline,
                    tags = $tags OR tags,
                    assigned_employees = $desired,
                    status = IF $has_status THEN $new_status ELSE status END,
                    version = version + 1,
                    updated_at = $now
                RETURN AFTER;
                COMMIT TRANSACTION;"#
            ))
            .bind(("project", record_id))
            .bind(("version", patch.version))
            .bind(("removed", diff.removed.clone()))
            .bind(("added", diff.added.clone()))
            .bind(("desired", diff.desired.clone()))
            .bind(("title", patch.title))
            .bind(("description", patch.description))
            .bind(("tasks", patch.tasks))
            .bind(("deadline", patch.deadline))
            .bind(("tags", patch.tags))
            .bind(("has_status", new_status.is_some()))
            .bind(("new_status", new_status))
            .bind(("now", now))
            .await?;

        let errors = result.take_errors();
        if !errors.is_empty() {
            return Err(classify_tx_errors(errors, id));
        }
        let last = result.num_statements() - 1;
        let updated: Option<Project> = result.take(last)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Project {} not found", id)))
    }

    /// Complete a project: migrate every assigned employee's reference from
    /// the active set to the completed set, credit the ledger, and flip the
    /// status, all in one transaction.
    ///
    /// Two guards make duplicate completion impossible: the status check
    /// aborts the transaction if the project is already completed, and the
    /// per-employee credit is skipped for employees that already hold the
    /// project in `completed_projects`, so a resumed retry never re-credits.
    pub async fn complete(&self, id: &str) -> RepoResult<Project> {
        let record_id = parse_project_id(id)?;
        let now = now_rfc3339();
        let mut result = self
            .base
            .db()
            .query(format!(
                r#"BEGIN TRANSACTION;
                LET $proj = (SELECT * FROM ONLY $project);
                IF $proj IS NONE {{ THROW '{THROW_NOT_FOUND}' }};
                IF $proj.status = 'completed' {{ THROW '{THROW_ALREADY_COMPLETED}' }};
                UPDATE employee SET
                    completed_projects += $project,
                    balance += $proj.amount,
                    updated_at = $now
                    WHERE id INSIDE $proj.assigned_employees
                      AND $project NOT INSIDE completed_projects;
                UPDATE employee SET
                    active_projects -= $project,
                    updated_at = $now
                    WHERE id INSIDE $proj.assigned_employees;
                UPDATE ONLY $project SET
                    status = 'completed',
                    version = version + 1,
                    updated_at = $now
                RETURN AFTER;
                COMMIT TRANSACTION;"#
            ))
            .bind(("project", record_id))
            .bind(("now", now))
            .await?;

        let errors = result.take_errors();
        if !errors.is_empty() {
            return Err(classify_tx_errors(errors, id));
        }
        let last = result.num_statements() - 1;
        let completed: Option<Project> = result.take(last)?;
        completed.ok_or_else(|| RepoError::NotFound(format!("Project {} not found", id)))
    }

    /// Delete a project and purge its reference from every employee, in one
    /// transaction. Balances already credited stay credited: completion is a
    /// one-way ledger event and deletion does not claw it back.
    pub async fn delete_with_references(&self, id: &str) -> RepoResult<()> {
        let record_id = parse_project_id(id)?;
        let now = now_rfc3339();
        let mut result = self
            .base
            .db()
            .query(format!(
                r#"BEGIN TRANSACTION;
                LET $proj = (SELECT * FROM ONLY $project);
                IF $proj IS NONE {{ THROW '{THROW_NOT_FOUND}' }};
                UPDATE employee SET
                    active_projects -= $project,
                    completed_projects -= $project,
                    updated_at = $now
                    WHERE $project INSIDE active_projects
                       OR $project INSIDE completed_projects;
                DELETE $project;
                COMMIT TRANSACTION;"#
            ))
            .bind(("project", record_id))
            .bind(("now", now))
            .await?;

        let errors = result.take_errors();
        if !errors.is_empty() {
            return Err(classify_tx_errors(errors, id));
        }
        Ok(())
    }
}

fn parse_project_id(id: &str) -> RepoResult<RecordId> {
    id.parse()
        .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))
}
