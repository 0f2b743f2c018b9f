//! Task endpoints. Creates and updates publish a `task_update_event` so
//! all connected clients refresh their boards; deletes do not.

use axum::extract::{Path, State};
use axum::Json;
use planhub_core::error::CoreError;
use planhub_core::notifications::NOTIFICATION_TASK_ASSIGNMENT;
use planhub_core::task::{ALL_PRIORITIES, ALL_STATUSES};
use planhub_core::types::Id;
use planhub_db::models::notification::CreateNotification;
use planhub_db::models::task::{CreateTask, Task, UpdateTask};
use planhub_db::repositories::{NotificationRepo, ProjectRepo, TaskRepo};
use planhub_events::{PlatformEvent, EVENT_TASK_UPDATE};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn check_priority(priority: Option<&str>) -> Result<(), AppError> {
    match priority {
        Some(p) if !ALL_PRIORITIES.contains(&p) => Err(AppError::Core(CoreError::Validation(
            format!("priority: unknown priority '{p}'"),
        ))),
        _ => Ok(()),
    }
}

fn check_status(status: Option<&str>) -> Result<(), AppError> {
    match status {
        Some(s) if !ALL_STATUSES.contains(&s) => Err(AppError::Core(CoreError::Validation(
            format!("status: unknown status '{s}'"),
        ))),
        _ => Ok(()),
    }
}

/// Publish the task to every connected client.
fn publish_task_update(state: &AppState, task: &Task) {
    match serde_json::to_value(task) {
        Ok(payload) => state
            .event_bus
            .publish(PlatformEvent::broadcast(EVENT_TASK_UPDATE, payload)),
        Err(err) => tracing::error!(error = %err, "Failed to serialize task event"),
    }
}

/// Record an assignment notification for the task's assignee. Failure to
/// write the notification never fails the task mutation itself.
async fn notify_assignee(state: &AppState, task: &Task, assignee_id: Id) {
    let input = CreateNotification {
        user_id: assignee_id,
        notification_type: NOTIFICATION_TASK_ASSIGNMENT.to_string(),
        message: format!("You have been assigned to task: {}", task.name),
        related_project_id: Some(task.project_id),
        related_task_id: Some(task.id),
    };
    if let Err(err) = NotificationRepo::create(&state.pool, &input).await {
        tracing::error!(error = %err, task_id = %task.id, "Failed to record assignment notification");
    }
}

/// `GET /api/projects/{project_id}/tasks` -- all tasks for a project,
/// subtasks included, oldest first.
pub async fn list_tasks(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(project_id): Path<Id>,
) -> AppResult<Json<Vec<Task>>> {
    if !ProjectRepo::exists(&state.pool, project_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "project",
            id: project_id,
        }));
    }
    let tasks = TaskRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(tasks))
}

/// `POST /api/projects/{project_id}/tasks` -- create a task or subtask.
pub async fn create_task(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(project_id): Path<Id>,
    Json(body): Json<CreateTask>,
) -> AppResult<Json<Task>> {
    if body.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name: must not be empty".into(),
        )));
    }
    check_priority(body.priority.as_deref())?;
    check_status(body.status.as_deref())?;

    if !ProjectRepo::exists(&state.pool, project_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "project",
            id: project_id,
        }));
    }
    if let Some(parent_id) = body.parent_task_id {
        let parent = TaskRepo::find_by_id(&state.pool, parent_id).await?.ok_or(
            AppError::Core(CoreError::NotFound {
                entity: "task",
                id: parent_id,
            }),
        )?;
        if parent.project_id != project_id {
            return Err(AppError::Core(CoreError::Validation(
                "parent_task_id: parent task belongs to a different project".into(),
            )));
        }
    }

    let task = TaskRepo::create(&state.pool, project_id, &body).await?;
    if let Some(assignee_id) = task.assignee_id {
        notify_assignee(&state, &task, assignee_id).await;
    }
    publish_task_update(&state, &task);

    tracing::info!(task_id = %task.id, project_id = %project_id, "Task created");
    Ok(Json(task))
}

/// `GET /api/tasks/{id}` -- a single task.
pub async fn get_task(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Id>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "task", id }))?;
    Ok(Json(task))
}

/// `PUT /api/tasks/{id}` -- partial update. Concurrent updates resolve
/// last-write-wins; any status may replace any other.
pub async fn update_task(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Id>,
    Json(body): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    check_priority(body.priority.as_deref())?;
    check_status(body.status.as_deref())?;

    if let Some(parent_id) = body.parent_task_id {
        let existing = TaskRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "task", id }))?;
        let parent = TaskRepo::find_by_id(&state.pool, parent_id).await?.ok_or(
            AppError::Core(CoreError::NotFound {
                entity: "task",
                id: parent_id,
            }),
        )?;
        if parent.project_id != existing.project_id {
            return Err(AppError::Core(CoreError::Validation(
                "parent_task_id: parent task belongs to a different project".into(),
            )));
        }
    }

    let newly_assigned = body.assignee_id;
    let task = TaskRepo::update(&state.pool, id, &body)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "task", id }))?;

    if let Some(assignee_id) = newly_assigned {
        notify_assignee(&state, &task, assignee_id).await;
    }
    publish_task_update(&state, &task);

    tracing::info!(task_id = %id, "Task updated");
    Ok(Json(task))
}

/// `DELETE /api/tasks/{id}` -- hard delete. No event is published on
/// deletion; clients pick up the removal on their next fetch.
pub async fn delete_task(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Id>,
) -> AppResult<Json<Value>> {
    let deleted = TaskRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "task", id }));
    }

    tracing::info!(task_id = %id, "Task deleted");
    Ok(Json(json!({ "message": "Task deleted" })))
}
