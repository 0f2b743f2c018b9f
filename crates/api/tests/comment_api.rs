//! HTTP-level integration tests for task comments and notifications.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth, put_json_auth};
use planhub_events::EVENT_COMMENT;
use sqlx::PgPool;

/// Seed a project and a task via the API, returning the task id.
async fn seed_task(app: axum::Router, token: &str) -> String {
    let project = body_json(
        post_json_auth(
            app.clone(),
            "/api/projects",
            token,
            serde_json::json!({
                "title": "Comment host",
                "start_date": "2026-01-01",
                "end_date": "2026-12-31",
            }),
        )
        .await,
    )
    .await;
    let project_id = project["id"].as_str().expect("project id");

    let task = body_json(
        post_json_auth(
            app,
            &format!("/api/projects/{project_id}/tasks"),
            token,
            serde_json::json!({ "name": "Discussed" }),
        )
        .await,
    )
    .await;
    task["id"].as_str().expect("task id").to_string()
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

/// Adding a comment returns it and publishes a broadcast comment_event.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_comment_publishes_event(pool: PgPool) {
    let (user, token) = common::create_user_with_token(&pool, "dev@example.com").await;
    let (app, bus) = common::build_test_app_with_bus(pool);
    let task_id = seed_task(app.clone(), &token).await;

    let mut rx = bus.subscribe();
    let response = post_json_auth(
        app,
        &format!("/api/tasks/{task_id}/comments"),
        &token,
        serde_json::json!({ "comment_text": "Looks good to me" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["comment_text"], "Looks good to me");
    assert_eq!(json["user_id"], serde_json::json!(user.id));

    let event = rx.try_recv().expect("event must be published");
    assert_eq!(event.event_type, EVENT_COMMENT);
    assert_eq!(event.recipient_user_id, None, "comment events are broadcast");
    assert_eq!(event.payload["comment_text"], "Looks good to me");
}

/// Comments list oldest first.
#[sqlx::test(migrations = "../db/migrations")]
async fn comments_list_in_insertion_order(pool: PgPool) {
    let (_user, token) = common::create_user_with_token(&pool, "dev@example.com").await;
    let app = common::build_test_app(pool);
    let task_id = seed_task(app.clone(), &token).await;

    for text in ["first", "second", "third"] {
        let response = post_json_auth(
            app.clone(),
            &format!("/api/tasks/{task_id}/comments"),
            &token,
            serde_json::json!({ "comment_text": text }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let json = body_json(get_auth(app, &format!("/api/tasks/{task_id}/comments"), &token).await).await;
    let texts: Vec<&str> = json
        .as_array()
        .expect("comment list")
        .iter()
        .map(|c| c["comment_text"].as_str().expect("text"))
        .collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
}

/// Blank comments are rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn blank_comment_rejected(pool: PgPool) {
    let (_user, token) = common::create_user_with_token(&pool, "dev@example.com").await;
    let app = common::build_test_app(pool);
    let task_id = seed_task(app.clone(), &token).await;

    let response = post_json_auth(
        app,
        &format!("/api/tasks/{task_id}/comments"),
        &token,
        serde_json::json!({ "comment_text": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// An empty update body marks a notification read; the unread flag flips.
#[sqlx::test(migrations = "../db/migrations")]
async fn empty_update_marks_notification_read(pool: PgPool) {
    let (_user, token) = common::create_user_with_token(&pool, "dev@example.com").await;
    let (assignee, assignee_token) =
        common::create_user_with_token(&pool, "assignee@example.com").await;
    let app = common::build_test_app(pool);
    let task_id = seed_task(app.clone(), &token).await;

    // Assigning generates a notification for the assignee.
    let response = put_json_auth(
        app.clone(),
        &format!("/api/tasks/{task_id}"),
        &token,
        serde_json::json!({ "assignee_id": assignee.id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let list = body_json(get_auth(app.clone(), "/api/notifications", &assignee_token).await).await;
    let notification_id = list[0]["id"].as_str().expect("notification id");
    assert_eq!(list[0]["read_status"], false);

    let updated = put_json_auth(
        app,
        &format!("/api/notifications/{notification_id}"),
        &assignee_token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let json = body_json(updated).await;
    assert_eq!(json["read_status"], true);
}

/// Notification updates address the row by id alone: any authenticated
/// user can flip any notification's read flag. No ownership check exists
/// on this route.
#[sqlx::test(migrations = "../db/migrations")]
async fn notification_update_has_no_ownership_check(pool: PgPool) {
    let (_user, token) = common::create_user_with_token(&pool, "dev@example.com").await;
    let (assignee, _assignee_token) =
        common::create_user_with_token(&pool, "assignee@example.com").await;
    let (_other, other_token) = common::create_user_with_token(&pool, "other@example.com").await;
    let app = common::build_test_app(pool.clone());
    let task_id = seed_task(app.clone(), &token).await;

    let response = put_json_auth(
        app.clone(),
        &format!("/api/tasks/{task_id}"),
        &token,
        serde_json::json!({ "assignee_id": assignee.id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let rows = planhub_db::repositories::NotificationRepo::list_for_user(&pool, assignee.id)
        .await
        .expect("listing should succeed");
    let notification_id = rows[0].id;

    let updated = put_json_auth(
        app,
        &format!("/api/notifications/{notification_id}"),
        &other_token,
        serde_json::json!({ "read_status": true }),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let json = body_json(updated).await;
    assert_eq!(json["read_status"], true);
    assert_eq!(json["user_id"], serde_json::json!(assignee.id));
}
