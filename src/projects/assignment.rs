//! Assignment Diff Engine
//!
//! Resolves caller-facing employee ids to internal record ids and computes
//! the added/removed sets between a project's current and desired assignment
//! lists. Resolution is strict: an unknown external id rejects the whole
//! operation, so a misspelled assignment can never silently detach anyone.

use std::collections::HashSet;

use surrealdb::RecordId;

use super::error::{ProjectError, ProjectResult};
use crate::db::repository::EmployeeRepository;

/// The added/removed sets between a current and a desired assignment list
///
/// `desired` is the full replacement set (resolved, deduplicated,
/// first-seen order preserved for stable writes).
#[derive(Debug, Clone, Default)]
pub struct AssignmentDiff {
    pub added: Vec<RecordId>,
    pub removed: Vec<RecordId>,
    pub desired: Vec<RecordId>,
}

impl AssignmentDiff {
    /// Compute the diff between the current and desired assignment sets
    ///
    /// Employees present in both sets appear in neither `added` nor
    /// `removed` and are untouched by synchronization.
    pub fn between(current: &[RecordId], desired: Vec<RecordId>) -> Self {
        let current_set: HashSet<&RecordId> = current.iter().collect();
        let desired_set: HashSet<&RecordId> = desired.iter().collect();

        let added = desired
            .iter()
            .filter(|id| !current_set.contains(*id))
            .cloned()
            .collect();
        let removed = current
            .iter()
            .filter(|id| !desired_set.contains(*id))
            .cloned()
            .collect();

        Self {
            added,
            removed,
            desired,
        }
    }

    /// A diff that leaves the assignment set unchanged
    pub fn unchanged(current: &[RecordId]) -> Self {
        Self {
            added: Vec::new(),
            removed: Vec::new(),
            desired: current.to_vec(),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Resolve external user ids to internal record ids
///
/// Duplicate inputs collapse to one id. Any id that does not resolve fails
/// the whole call with [`ProjectError::ReferenceResolution`] listing every
/// offending id.
pub async fn resolve_user_ids(
    employees: &EmployeeRepository,
    user_ids: &[String],
) -> ProjectResult<Vec<RecordId>> {
    // Dedup while keeping first-seen order
    let mut seen = HashSet::new();
    let unique: Vec<String> = user_ids
        .iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect();

    if unique.is_empty() {
        return Ok(Vec::new());
    }

    let resolved = employees.resolve_user_ids(unique.clone()).await?;

    if resolved.len() != unique.len() {
        let found: HashSet<&str> = resolved.iter().map(|r| r.user_id.as_str()).collect();
        let missing: Vec<String> = unique
            .iter()
            .filter(|id| !found.contains(id.as_str()))
            .cloned()
            .collect();
        return Err(ProjectError::ReferenceResolution(missing));
    }

    // Store lookup order is not input order; restore it
    let mut by_user_id: std::collections::HashMap<&str, &RecordId> = resolved
        .iter()
        .map(|r| (r.user_id.as_str(), &r.id))
        .collect();
    Ok(unique
        .iter()
        .filter_map(|uid| by_user_id.remove(uid.as_str()).cloned())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::RecordId;

    fn emp(key: &str) -> RecordId {
        RecordId::from_table_key("employee", key)
    }

    #[test]
    fn diff_between_disjoint_sets() {
        let current = vec![emp("a"), emp("b")];
        let desired = vec![emp("b"), emp("c")];

        let diff = AssignmentDiff::between(&current, desired);

        assert_eq!(diff.added, vec![emp("c")]);
        assert_eq!(diff.removed, vec![emp("a")]);
        assert_eq!(diff.desired, vec![emp("b"), emp("c")]);
    }

    #[test]
    fn diff_identical_sets_is_noop() {
        let current = vec![emp("a"), emp("b")];
        let diff = AssignmentDiff::between(&current, current.clone());

        assert!(diff.is_noop());
        assert_eq!(diff.desired, current);
    }

    #[test]
    fn diff_from_empty_adds_everyone() {
        let diff = AssignmentDiff::between(&[], vec![emp("a"), emp("b")]);

        assert_eq!(diff.added.len(), 2);
        assert!(diff.removed.is_empty());
    }

    #[test]
    fn diff_to_empty_removes_everyone() {
        let current = vec![emp("a"), emp("b")];
        let diff = AssignmentDiff::between(&current, Vec::new());

        assert!(diff.added.is_empty());
        assert_eq!(diff.removed.len(), 2);
        assert!(diff.desired.is_empty());
    }

    #[test]
    fn unchanged_keeps_current_set() {
        let current = vec![emp("a")];
        let diff = AssignmentDiff::unchanged(&current);

        assert!(diff.is_noop());
        assert_eq!(diff.desired, current);
    }
}
