//! Completion Workflow - project lifecycle transitions
//!
//! States move one way: `Upcoming -> Current -> Completed`. `Completed` is
//! terminal. Two named transitions exist:
//!
//! - **auto-advance**: an upcoming project that gains assignees becomes
//!   current. Always applied on edit; whether creation with assignees also
//!   advances is a policy decision the original system never settled, so it
//!   is a flag here rather than a guess.
//! - **complete**: explicit, applied by `ProjectRepository::complete`
//!   together with the ledger credit.

use crate::db::models::ProjectStatus;

/// Workflow policy knobs
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletionPolicy {
    /// Advance `Upcoming -> Current` already at creation time when the
    /// create payload carries assignees. Default: only edits advance.
    pub advance_on_create: bool,
}

/// Status for a freshly created project
pub fn initial_status(policy: CompletionPolicy, has_assignees: bool) -> ProjectStatus {
    if policy.advance_on_create && has_assignees {
        ProjectStatus::Current
    } else {
        ProjectStatus::Upcoming
    }
}

/// The auto-advance transition, evaluated on every edit
///
/// Returns the status to move to, or `None` when the edit leaves the status
/// alone. There is no reverse transition: a current project that loses all
/// assignees stays current.
pub fn auto_advance(status: ProjectStatus, has_assignees: bool) -> Option<ProjectStatus> {
    match status {
        ProjectStatus::Upcoming if has_assignees => Some(ProjectStatus::Current),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upcoming_with_assignees_advances() {
        assert_eq!(
            auto_advance(ProjectStatus::Upcoming, true),
            Some(ProjectStatus::Current)
        );
    }

    #[test]
    fn upcoming_without_assignees_stays() {
        assert_eq!(auto_advance(ProjectStatus::Upcoming, false), None);
    }

    #[test]
    fn current_never_reverts() {
        assert_eq!(auto_advance(ProjectStatus::Current, false), None);
        assert_eq!(auto_advance(ProjectStatus::Current, true), None);
    }

    #[test]
    fn completed_is_terminal() {
        assert!(ProjectStatus::Completed.is_terminal());
        assert_eq!(auto_advance(ProjectStatus::Completed, true), None);
    }

    #[test]
    fn initial_status_follows_policy() {
        let lazy = CompletionPolicy::default();
        let eager = CompletionPolicy {
            advance_on_create: true,
        };

        assert_eq!(initial_status(lazy, true), ProjectStatus::Upcoming);
        assert_eq!(initial_status(eager, true), ProjectStatus::Current);
        assert_eq!(initial_status(eager, false), ProjectStatus::Upcoming);
    }
}
