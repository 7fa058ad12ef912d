//! HTTP-level integration tests for the entity endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_and_fetch, delete, get, patch_json, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Envelope and CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_returns_ack_without_data(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/projects", json!({"name": "Apollo"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["code"], 200);
    assert_eq!(json["message"], "successfully");
    assert!(json.get("data").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_note_by_id(pool: PgPool) {
    let created = create_and_fetch(&pool, "notes", json!({"text": "hello"})).await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/notes/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["text"], "hello");
    assert_eq!(json["data"]["author"], serde_json::Value::Null);
    assert_eq!(json["data"]["author_info"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_missing_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/todos/0190c2a4-7b1e-7cc3-9a4e-2f1d3c5b6a7e").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["err"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_malformed_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/meetings/not-an-id").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["err"], "INVALID_IDENTIFIER");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_malformed_reference_in_body_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/notes",
        json!({"author": "65f1c0ffee", "text": "hello"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["err"], "INVALID_IDENTIFIER");

    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/v1/notes").await).await;
    assert_eq!(list["data"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_required_field_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/todos", json!({"task": ""})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["err"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/todos", json!({"status": "open"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["err"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_todo_status(pool: PgPool) {
    let created = create_and_fetch(
        &pool,
        "todos",
        json!({"task": "write report", "status": "open"}),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(app, &format!("/api/v1/todos/{id}"), json!({"status": "done"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "done");
    assert_eq!(json["data"]["task"], "write report");
    assert_eq!(json["data"]["created_at"], created["created_at"]);
    assert_ne!(json["data"]["updated_at"], created["updated_at"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_note_with_empty_text_is_rejected(pool: PgPool) {
    let created = create_and_fetch(&pool, "notes", json!({"text": "keep me"})).await;
    let uri = format!("/api/v1/notes/{}", created["id"].as_str().unwrap());

    let response = patch_json(common::build_test_app(pool.clone()), &uri, json!({"text": ""})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["err"], "VALIDATION_ERROR");

    let json = body_json(get(common::build_test_app(pool), &uri).await).await;
    assert_eq!(json["data"]["text"], "keep me");
    assert_eq!(json["data"]["updated_at"], created["updated_at"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_cannot_move_task_off_its_project(pool: PgPool) {
    let project = create_and_fetch(&pool, "projects", json!({"name": "Apollo"})).await;
    let task = create_and_fetch(
        &pool,
        "project-tasks",
        json!({"project": project["id"], "status": "open"}),
    )
    .await;
    let uri = format!("/api/v1/project-tasks/{}", task["id"].as_str().unwrap());

    let app = common::build_test_app(pool);
    let response = patch_json(app, &uri, json!({"project": "", "status": "done"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "done");
    assert_eq!(json["data"]["project"], project["id"]);
    assert_eq!(json["data"]["project_info"][0]["name"], "Apollo");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_missing_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        "/api/v1/projects/0190c2a4-7b1e-7cc3-9a4e-2f1d3c5b6a7e",
        json!({"name": "ghost"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_then_delete_again(pool: PgPool) {
    let created = create_and_fetch(&pool, "projects", json!({"name": "Temp"})).await;
    let uri = format!("/api/v1/projects/{}", created["id"].as_str().unwrap());

    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.get("data").is_none());

    let response = delete(common::build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Relations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_notes_by_user(pool: PgPool) {
    let user = create_and_fetch(&pool, "users", json!({"email": "ada@example.com"})).await;
    let user_id = user["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/notes", json!({"author": user_id, "text": "mine"})).await;
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/notes", json!({"text": "orphan"})).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/notes/user/{user_id}")).await).await;
    let notes = json["data"].as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["text"], "mine");
    assert_eq!(notes[0]["author_info"][0]["email"], "ada@example.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_tasks_survive_project_delete(pool: PgPool) {
    let project = create_and_fetch(&pool, "projects", json!({"name": "Gemini"})).await;
    let project_id = project["id"].as_str().unwrap();

    let task = create_and_fetch(
        &pool,
        "project-tasks",
        json!({"project": project_id, "task_description": "launch"}),
    )
    .await;
    assert_eq!(task["project_info"][0]["name"], "Gemini");

    let app = common::build_test_app(pool.clone());
    delete(app, &format!("/api/v1/projects/{project_id}")).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/project-tasks/project/{project_id}")).await).await;
    let tasks = json["data"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["project"], project_id);
    assert_eq!(tasks[0]["project_info"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_meeting_participants_in_order(pool: PgPool) {
    let alice = create_and_fetch(&pool, "users", json!({"email": "alice@example.com"})).await;
    let bob = create_and_fetch(&pool, "users", json!({"email": "bob@example.com"})).await;

    let meeting = create_and_fetch(
        &pool,
        "meetings",
        json!({
            "title": "Standup",
            "created_by": alice["id"],
            "participants": [bob["id"], alice["id"]],
        }),
    )
    .await;

    let participants = meeting["participants"].as_array().unwrap();
    assert_eq!(participants.len(), 2);
    assert_eq!(participants[0]["participant"], bob["id"]);
    assert_eq!(participants[0]["participant_info"][0]["email"], "bob@example.com");
    assert_eq!(participants[1]["participant_info"][0]["email"], "alice@example.com");

    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/meetings/user/{}", alice["id"].as_str().unwrap());
    let json = body_json(get(app, &uri).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_job_applications_by_manager(pool: PgPool) {
    let manager = create_and_fetch(&pool, "users", json!({"email": "boss@example.com"})).await;
    let application = create_and_fetch(
        &pool,
        "jobApplications",
        json!({"applicant_name": "Lin", "manager": manager["id"], "stage": "interview"}),
    )
    .await;
    assert_eq!(application["manager_info"][0]["email"], "boss@example.com");
    assert_eq!(application["department_info"], json!([]));

    let app = common::build_test_app(pool);
    let uri = format!(
        "/api/v1/jobApplications/manager/{}",
        manager["id"].as_str().unwrap()
    );
    let json = body_json(get(app, &uri).await).await;
    assert_eq!(json["data"][0]["applicant_name"], "Lin");
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_email_returns_409(pool: PgPool) {
    let body = json!({"email": "dup@example.com"});
    let response = post_json(common::build_test_app(pool.clone()), "/api/v1/users", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(common::build_test_app(pool), "/api/v1/users", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["err"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_email_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/users", json!({"email": "not-an-email"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_upsert_user_by_email(pool: PgPool) {
    let first = put_json(
        common::build_test_app(pool.clone()),
        "/api/v1/users",
        json!({"email": "up@example.com", "user_name": "Up"}),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);
    let first = body_json(first).await;

    let second = put_json(
        common::build_test_app(pool.clone()),
        "/api/v1/users",
        json!({"email": "up@example.com", "position": "Lead"}),
    )
    .await;
    let second = body_json(second).await;

    assert_eq!(second["data"]["id"], first["data"]["id"]);
    assert_eq!(second["data"]["user_name"], "Up");
    assert_eq!(second["data"]["position"], "Lead");

    let list = body_json(get(common::build_test_app(pool), "/api/v1/users").await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_users_by_department(pool: PgPool) {
    let department = create_and_fetch(&pool, "departments", json!({"name": "Ops"})).await;
    create_and_fetch(
        &pool,
        "users",
        json!({"email": "ops@example.com", "department": department["id"]}),
    )
    .await;

    let app = common::build_test_app(pool);
    let uri = format!(
        "/api/v1/users/department/{}",
        department["id"].as_str().unwrap()
    );
    let json = body_json(get(app, &uri).await).await;
    assert_eq!(json["data"][0]["department_info"][0]["name"], "Ops");
}
