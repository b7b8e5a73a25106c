//! Completion workflow and ledger integration tests
//!
//! The ledger contract: completing a project credits every assigned
//! employee's balance by exactly the project amount, exactly once, and the
//! balance never decreases afterwards, not even when the project is
//! deleted.

use crewtrack::db::DbService;
use crewtrack::db::models::{Employee, EmployeeCreate, ProjectCreate, ProjectStatus, ProjectUpdate};
use crewtrack::db::repository::EmployeeRepository;
use crewtrack::projects::{CompletionPolicy, ProjectError, ProjectService};

async fn setup() -> (ProjectService, EmployeeRepository) {
    let db = DbService::in_memory().await.unwrap();
    (
        ProjectService::new(db.db.clone(), CompletionPolicy::default()),
        EmployeeRepository::new(db.db),
    )
}

async fn register(employees: &EmployeeRepository, user_id: &str, name: &str) -> Employee {
    employees
        .create(EmployeeCreate {
            user_id: user_id.to_string(),
            name: name.to_string(),
            email: None,
            role: None,
            tags: None,
            badges: None,
        })
        .await
        .unwrap()
}

async fn fetch(employees: &EmployeeRepository, user_id: &str) -> Employee {
    employees
        .find_by_user_id(user_id)
        .await
        .unwrap()
        .unwrap_or_else(|| panic!("employee {user_id} missing"))
}

fn create_payload(code: &str, amount: f64, assigned: &[&str]) -> ProjectCreate {
    ProjectCreate {
        code: code.to_string(),
        title: format!("Project {code}"),
        description: None,
        amount,
        tasks: None,
        deadline: None,
        tags: None,
        assigned_user_ids: assigned.iter().map(|s| s.to_string()).collect(),
    }
}

#[tokio::test]
async fn complete_credits_each_assignee_exactly_once() {
    let (service, employees) = setup().await;
    register(&employees, "e1", "Ana").await;
    register(&employees, "e2", "Ben").await;

    let project = service
        .create_project(create_payload("PRJ-1", 1000.0, &["e1", "e2"]))
        .await
        .unwrap();
    let pid = project.id.clone().unwrap();
    let id = pid.to_string();

    let completed = service.complete_project(&id).await.unwrap();
    assert_eq!(completed.status, ProjectStatus::Completed);

    for user_id in ["e1", "e2"] {
        let emp = fetch(&employees, user_id).await;
        assert_eq!(emp.balance, 1000.0);
        assert!(!emp.active_projects.contains(&pid));
        assert!(emp.completed_projects.contains(&pid));
    }

    // Duplicate completion is a deterministic no-op failure
    let result = service.complete_project(&id).await;
    assert!(matches!(result, Err(ProjectError::AlreadyCompleted(_))));

    for user_id in ["e1", "e2"] {
        let emp = fetch(&employees, user_id).await;
        assert_eq!(emp.balance, 1000.0, "second complete must not re-credit");
        assert_eq!(emp.completed_projects.len(), 1);
    }
}

#[tokio::test]
async fn complete_missing_project_not_found() {
    let (service, _) = setup().await;

    let result = service.complete_project("project:missing").await;

    assert!(matches!(result, Err(ProjectError::NotFound(_))));
}

#[tokio::test]
async fn complete_without_assignees_only_flips_status() {
    let (service, employees) = setup().await;
    register(&employees, "e1", "Ana").await;

    let project = service
        .create_project(create_payload("PRJ-1", 750.0, &[]))
        .await
        .unwrap();

    let completed = service
        .complete_project(&project.id.clone().unwrap().to_string())
        .await
        .unwrap();

    assert_eq!(completed.status, ProjectStatus::Completed);
    assert_eq!(fetch(&employees, "e1").await.balance, 0.0);
}

#[tokio::test]
async fn deleting_completed_project_keeps_credited_balance() {
    let (service, employees) = setup().await;
    register(&employees, "e1", "Ana").await;

    let project = service
        .create_project(create_payload("PRJ-1", 300.0, &["e1"]))
        .await
        .unwrap();
    let pid = project.id.clone().unwrap();

    service.complete_project(&pid.to_string()).await.unwrap();
    service.delete_project(&pid.to_string()).await.unwrap();

    let emp = fetch(&employees, "e1").await;
    assert_eq!(emp.balance, 300.0, "deletion must not claw back earnings");
    assert!(emp.completed_projects.is_empty(), "reference must be purged");
    assert!(emp.active_projects.is_empty());
}

#[tokio::test]
async fn balance_accumulates_across_projects() {
    let (service, employees) = setup().await;
    register(&employees, "e1", "Ana").await;

    for (code, amount) in [("PRJ-1", 250.0), ("PRJ-2", 750.0)] {
        let project = service
            .create_project(create_payload(code, amount, &["e1"]))
            .await
            .unwrap();
        service
            .complete_project(&project.id.clone().unwrap().to_string())
            .await
            .unwrap();
    }

    let emp = fetch(&employees, "e1").await;
    assert_eq!(emp.balance, 1000.0);
    assert_eq!(emp.completed_projects.len(), 2);
    assert!(emp.active_projects.is_empty());
}

#[tokio::test]
async fn completion_only_credits_current_assignees() {
    let (service, employees) = setup().await;
    register(&employees, "a", "Ana").await;
    register(&employees, "b", "Ben").await;

    let project = service
        .create_project(create_payload("PRJ-1", 400.0, &["a"]))
        .await
        .unwrap();
    let id = project.id.clone().unwrap().to_string();

    // Reassign from a to b before completion
    let updated = service
        .edit_project(
            &id,
            ProjectUpdate {
                assigned_user_ids: Some(vec!["b".to_string()]),
                version: project.version,
                ..Default::default()
            },
        )
        .await
        .unwrap();

    service.complete_project(&id).await.unwrap();
    assert_eq!(updated.status, ProjectStatus::Current);

    let a = fetch(&employees, "a").await;
    let b = fetch(&employees, "b").await;
    assert_eq!(a.balance, 0.0, "detached employee earns nothing");
    assert!(a.completed_projects.is_empty());
    assert_eq!(b.balance, 400.0);
    assert_eq!(b.completed_projects.len(), 1);
}

#[tokio::test]
async fn references_stay_disjoint_through_lifecycle() {
    let (service, employees) = setup().await;
    register(&employees, "e1", "Ana").await;

    let project = service
        .create_project(create_payload("PRJ-1", 100.0, &["e1"]))
        .await
        .unwrap();
    let pid = project.id.clone().unwrap();

    let before = fetch(&employees, "e1").await;
    assert!(before.active_projects.contains(&pid));
    assert!(!before.completed_projects.contains(&pid));

    service.complete_project(&pid.to_string()).await.unwrap();

    let after = fetch(&employees, "e1").await;
    assert!(!after.active_projects.contains(&pid));
    assert!(after.completed_projects.contains(&pid));
    assert!(
        after
            .active_projects
            .iter()
            .all(|p| !after.completed_projects.contains(p)),
        "active and completed sets must stay disjoint"
    );
}
