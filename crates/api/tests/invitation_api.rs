//! HTTP-level integration tests for the role-gated invitation endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth};
use planhub_core::roles::{ROLE_PROJECT_MANAGER, ROLE_TEAM_MEMBER};
use sqlx::PgPool;

/// A project manager can send an invitation; it starts pending.
#[sqlx::test(migrations = "../db/migrations")]
async fn project_manager_can_invite(pool: PgPool) {
    let (_pm, token) =
        common::create_user_with_role_and_token(&pool, "pm@example.com", ROLE_PROJECT_MANAGER)
            .await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "invitee_email": "newhire@example.com",
        "role": ROLE_TEAM_MEMBER,
    });
    let response = post_json_auth(app, "/api/invitations", &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["invitee_email"], "newhire@example.com");
    assert_eq!(json["status"], "pending");
}

/// Any other role is rejected with 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn team_member_cannot_invite(pool: PgPool) {
    let (_member, token) = common::create_user_with_token(&pool, "member@example.com").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "invitee_email": "newhire@example.com",
        "role": ROLE_TEAM_MEMBER,
    });
    let response = post_json_auth(app, "/api/invitations", &token, body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Malformed invitee emails are rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_invitee_email_rejected(pool: PgPool) {
    let (_pm, token) =
        common::create_user_with_role_and_token(&pool, "pm@example.com", ROLE_PROJECT_MANAGER)
            .await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "invitee_email": "not-an-email",
        "role": ROLE_TEAM_MEMBER,
    });
    let response = post_json_auth(app, "/api/invitations", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// The listing only contains the caller's own invitations.
#[sqlx::test(migrations = "../db/migrations")]
async fn listing_is_scoped_to_inviter(pool: PgPool) {
    let (_pm_a, token_a) =
        common::create_user_with_role_and_token(&pool, "pm-a@example.com", ROLE_PROJECT_MANAGER)
            .await;
    let (_pm_b, token_b) =
        common::create_user_with_role_and_token(&pool, "pm-b@example.com", ROLE_PROJECT_MANAGER)
            .await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "invitee_email": "hire@example.com",
        "role": ROLE_TEAM_MEMBER,
    });
    let response = post_json_auth(app.clone(), "/api/invitations", &token_a, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let own = body_json(get_auth(app.clone(), "/api/invitations", &token_a).await).await;
    assert_eq!(own.as_array().map(Vec::len), Some(1));

    let other = body_json(get_auth(app, "/api/invitations", &token_b).await).await;
    assert_eq!(other.as_array().map(Vec::len), Some(0));
}
