//! Employee Repository

use serde::Deserialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Employee, EmployeeCreate};
use crate::utils::now_rfc3339;

/// Row shape for external id resolution
#[derive(Debug, Deserialize)]
pub struct ResolvedEmployee {
    #[serde(with = "crate::db::models::serde_helpers::record_id")]
    pub id: RecordId,
    pub user_id: String,
}

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all employees ordered by name
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee ORDER BY name")
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let record_id: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let emp: Option<Employee> = self.base.db().select(record_id).await?;
        Ok(emp)
    }

    /// Find employee by external user id
    pub async fn find_by_user_id(&self, user_id: &str) -> RepoResult<Option<Employee>> {
        let user_id_owned = user_id.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE user_id = $user_id LIMIT 1")
            .bind(("user_id", user_id_owned))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Resolve a batch of external user ids to internal record ids
    ///
    /// Returns only the ids that exist; the caller decides whether missing
    /// ids are an error (assignment resolution treats them as one).
    pub async fn resolve_user_ids(&self, user_ids: Vec<String>) -> RepoResult<Vec<ResolvedEmployee>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut result = self
            .base
            .db()
            .query("SELECT id, user_id FROM employee WHERE user_id INSIDE $user_ids")
            .bind(("user_ids", user_ids))
            .await?;
        let resolved: Vec<ResolvedEmployee> = result.take(0)?;
        Ok(resolved)
    }

    /// Register a new employee
    ///
    /// Relationship fields start empty and the ledger starts at zero;
    /// they are mutated only by the project repository afterwards.
    pub async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        // Check duplicate user_id
        if self.find_by_user_id(&data.user_id).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Employee with user id '{}' already exists",
                data.user_id
            )));
        }

        // Check duplicate email if provided
        if let Some(ref email) = data.email
            && self.find_by_email(email).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Employee with email '{}' already exists",
                email
            )));
        }

        let role = data.role.unwrap_or_else(|| "employee".to_string());
        let now = now_rfc3339();

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE employee SET
                    user_id = $user_id,
                    name = $name,
                    email = $email,
                    role = $role,
                    tags = $tags,
                    badges = $badges,
                    active_projects = [],
                    completed_projects = [],
                    balance = 0.0,
                    created_at = $now,
                    updated_at = $now
                RETURN AFTER"#,
            )
            .bind(("user_id", data.user_id))
            .bind(("name", data.name))
            .bind(("email", data.email))
            .bind(("role", role))
            .bind(("tags", data.tags.unwrap_or_default()))
            .bind(("badges", data.badges.unwrap_or_default()))
            .bind(("now", now))
            .await?;

        let created: Option<Employee> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Find employee by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }
}
