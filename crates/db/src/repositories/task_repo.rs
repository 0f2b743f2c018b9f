//! Repository for the `tasks` table.

use planhub_core::task::{PRIORITY_MEDIUM, STATUS_NOT_STARTED};
use planhub_core::types::Id;
use sqlx::PgPool;

use crate::models::task::{CreateTask, Task, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, parent_task_id, name, description, assignee_id, \
     due_date, priority, status, created_at, updated_at";

/// Provides CRUD operations for tasks and subtasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task under a project, returning the created row.
    /// Priority defaults to Medium and status to not_started when omitted.
    pub async fn create(
        pool: &PgPool,
        project_id: Id,
        input: &CreateTask,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks \
                (project_id, parent_task_id, name, description, assignee_id, due_date, priority, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .bind(input.parent_task_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.assignee_id)
            .bind(input.due_date)
            .bind(input.priority.as_deref().unwrap_or(PRIORITY_MEDIUM))
            .bind(input.status.as_deref().unwrap_or(STATUS_NOT_STARTED))
            .fetch_one(pool)
            .await
    }

    /// Find a task by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: Id) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tasks (including subtasks) for a project, oldest first.
    pub async fn list_for_project(pool: &PgPool, project_id: Id) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks WHERE project_id = $1 ORDER BY created_at"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a task. Only non-`None` fields are applied; `updated_at` is
    /// stamped server-side.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: Id,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                parent_task_id = COALESCE($4, parent_task_id), \
                assignee_id = COALESCE($5, assignee_id), \
                due_date = COALESCE($6, due_date), \
                priority = COALESCE($7, priority), \
                status = COALESCE($8, status), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.parent_task_id)
            .bind(input.assignee_id)
            .bind(input.due_date)
            .bind(&input.priority)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a task. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: Id) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
