//! Integration tests for read-time joins and relation queries.

use allnote_db::models::department::{CreateDepartment, UpdateDepartment};
use allnote_db::models::meeting::{CreateMeeting, UpdateMeeting};
use allnote_db::models::project::CreateProject;
use allnote_db::models::project_task::CreateProjectTask;
use allnote_db::models::user::CreateUser;
use allnote_db::repositories::{
    DepartmentRepo, MeetingRepo, ProjectRepo, ProjectTaskRepo, UserRepo,
};
use sqlx::PgPool;

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        ..Default::default()
    }
}

fn new_meeting(title: &str, created_by: &str, participants: Vec<String>) -> CreateMeeting {
    CreateMeeting {
        title: title.to_string(),
        description: String::new(),
        participants,
        start_dt: None,
        end_dt: None,
        location: "Room 1".to_string(),
        created_by: created_by.to_string(),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_deleting_project_leaves_tasks_dangling(pool: PgPool) {
    let project = ProjectRepo::create(
        &pool,
        &CreateProject {
            name: "Gemini".to_string(),
            start_dt: None,
            end_dt: None,
        },
    )
    .await
    .unwrap();
    let task = ProjectTaskRepo::create(
        &pool,
        &CreateProjectTask {
            project: project.id.to_string(),
            manager: String::new(),
            department: String::new(),
            task_description: "launch".to_string(),
            status: "open".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(task.project_info.len(), 1);
    assert_eq!(task.project_info[0].name, "Gemini");

    assert!(ProjectRepo::delete(&pool, project.id).await.unwrap());

    let task = ProjectTaskRepo::find_by_id(&pool, task.id)
        .await
        .unwrap()
        .expect("task survives project deletion");
    assert_eq!(task.project, Some(project.id));
    assert!(task.project_info.is_empty());

    let by_project = ProjectTaskRepo::list_by_project(&pool, project.id)
        .await
        .unwrap();
    assert_eq!(by_project.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_meeting_participants_keep_order(pool: PgPool) {
    let alice = UserRepo::create(&pool, &new_user("alice@example.com"))
        .await
        .unwrap();
    let bob = UserRepo::create(&pool, &new_user("bob@example.com"))
        .await
        .unwrap();
    let ghost = allnote_core::types::new_id();

    let meeting = MeetingRepo::create(
        &pool,
        &new_meeting(
            "Standup",
            &alice.id.to_string(),
            vec![bob.id.to_string(), ghost.to_string(), alice.id.to_string()],
        ),
    )
    .await
    .unwrap();

    let slots: Vec<_> = meeting.participants.iter().map(|p| p.participant).collect();
    assert_eq!(slots, vec![bob.id, ghost, alice.id]);
    assert_eq!(meeting.participants[0].participant_info[0].email, "bob@example.com");
    assert!(meeting.participants[1].participant_info.is_empty());
    assert_eq!(meeting.participants[2].participant_info[0].email, "alice@example.com");
    assert_eq!(meeting.created_by_info.len(), 1);

    let listed = MeetingRepo::list_by_creator(&pool, alice.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].participants.len(), 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_meeting_participants_replaced_by_patch(pool: PgPool) {
    let alice = UserRepo::create(&pool, &new_user("alice@example.com"))
        .await
        .unwrap();
    let meeting = MeetingRepo::create(
        &pool,
        &new_meeting("Review", "", vec![alice.id.to_string()]),
    )
    .await
    .unwrap();

    let untouched = MeetingRepo::update(&pool, meeting.id, &UpdateMeeting::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(untouched.participants.len(), 1);

    let emptied = UpdateMeeting {
        participants: Some(Vec::new()),
        ..Default::default()
    };
    let updated = MeetingRepo::update(&pool, meeting.id, &emptied)
        .await
        .unwrap()
        .unwrap();
    assert!(updated.participants.is_empty());
    assert_eq!(updated.title, "Review");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_bad_participant_aborts_create(pool: PgPool) {
    let result = MeetingRepo::create(
        &pool,
        &new_meeting("Broken", "", vec!["nope".to_string()]),
    )
    .await;
    assert!(result.is_err());
    assert!(MeetingRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_department_hierarchy(pool: PgPool) {
    let root = DepartmentRepo::create(
        &pool,
        &CreateDepartment {
            name: "Engineering".to_string(),
            parent: String::new(),
        },
    )
    .await
    .unwrap();
    let child = DepartmentRepo::create(
        &pool,
        &CreateDepartment {
            name: "Platform".to_string(),
            parent: root.id.to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(child.parent, Some(root.id));
    assert_eq!(child.parent_info[0].name, "Engineering");
    assert!(root.parent_info.is_empty());

    let children = DepartmentRepo::list_by_parent(&pool, root.id).await.unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].id, child.id);

    let detached = DepartmentRepo::update(
        &pool,
        child.id,
        &UpdateDepartment {
            parent: Some(String::new()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(detached.parent, None);
    assert_eq!(detached.name, "Platform");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_users_by_department(pool: PgPool) {
    let department = DepartmentRepo::create(
        &pool,
        &CreateDepartment {
            name: "Sales".to_string(),
            parent: String::new(),
        },
    )
    .await
    .unwrap();
    let member = UserRepo::create(
        &pool,
        &CreateUser {
            department: department.id.to_string(),
            ..new_user("rep@example.com")
        },
    )
    .await
    .unwrap();
    UserRepo::create(&pool, &new_user("other@example.com"))
        .await
        .unwrap();

    assert_eq!(member.department_info[0].name, "Sales");

    let members = UserRepo::list_by_department(&pool, department.id)
        .await
        .unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].email, "rep@example.com");
}
