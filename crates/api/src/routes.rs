//! Route tree assembly.

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::services::ServeDir;

use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ws                                   WebSocket (token in query)
///
/// /auth/register                        register (public)
/// /auth/login                           login (public)
///
/// /users/me                             get, update own profile
/// /users/{id}                           get, update any profile
///
/// /invitations                          list; create (project managers only)
///
/// /projects                             list, create
/// /projects/{id}                        get, update, archive (DELETE)
/// /projects/{id}/members                add member (POST)
/// /projects/{id}/tasks                  list, create
///
/// /tasks/{id}                           get, update, delete
/// /tasks/{id}/comments                  list, create
/// /tasks/{id}/attachments               list, upload (multipart)
///
/// /notifications                        list
/// /notifications/{id}                   set read flag (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // --- Realtime ---
        .route("/ws", get(ws::ws_handler))
        // --- Auth (public) ---
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        // --- Users ---
        .route(
            "/users/me",
            get(handlers::user::get_me).put(handlers::user::update_me),
        )
        .route(
            "/users/{id}",
            get(handlers::user::get_user).put(handlers::user::update_user),
        )
        // --- Invitations ---
        .route(
            "/invitations",
            get(handlers::invitation::list_invitations)
                .post(handlers::invitation::create_invitation),
        )
        // --- Projects ---
        .route(
            "/projects",
            get(handlers::project::list_projects).post(handlers::project::create_project),
        )
        .route(
            "/projects/{id}",
            get(handlers::project::get_project)
                .put(handlers::project::update_project)
                .delete(handlers::project::archive_project),
        )
        .route("/projects/{id}/members", post(handlers::project::add_member))
        .route(
            "/projects/{id}/tasks",
            get(handlers::task::list_tasks).post(handlers::task::create_task),
        )
        // --- Tasks ---
        .route(
            "/tasks/{id}",
            get(handlers::task::get_task)
                .put(handlers::task::update_task)
                .delete(handlers::task::delete_task),
        )
        .route(
            "/tasks/{id}/comments",
            get(handlers::comment::list_comments).post(handlers::comment::create_comment),
        )
        .route(
            "/tasks/{id}/attachments",
            get(handlers::attachment::list_attachments)
                .post(handlers::attachment::upload_attachment),
        )
        // --- Notifications ---
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications/{id}",
            put(handlers::notification::update_notification),
        )
}

/// Build the root-level routes that live outside `/api`: the health
/// check and the static file service for uploaded attachments.
pub fn root_routes(storage_dir: &std::path::Path) -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .nest_service("/storage", ServeDir::new(storage_dir))
}
