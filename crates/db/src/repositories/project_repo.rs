//! Repository for the `projects` table.

use planhub_core::types::Id;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, start_date, end_date, archived, created_by, created_at, updated_at";

/// Provides CRUD operations for projects. "Deletion" is a soft archive.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row. Runs inside the
    /// caller's transaction so the project and its initial milestone set
    /// commit atomically.
    pub async fn create(
        tx: &mut sqlx::PgConnection,
        input: &CreateProject,
        created_by: Id,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, description, start_date, end_date, created_by) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(created_by)
            .fetch_one(tx)
            .await
    }

    /// Find a project by its internal ID, archived or not.
    pub async fn find_by_id(pool: &PgPool, id: Id) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects visible to `user_id` with the given archived flag:
    /// projects the user created plus projects where the user is a member,
    /// most recently created first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Id,
        archived: bool,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects \
             WHERE archived = $1 \
               AND (created_by = $2 \
                    OR id IN (SELECT project_id FROM project_members WHERE user_id = $2)) \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(archived)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project's own fields. Only non-`None` fields are applied;
    /// `updated_at` is stamped server-side. Milestone replacement is a
    /// separate operation on [`MilestoneRepo`](crate::repositories::MilestoneRepo).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: Id,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                start_date = COALESCE($4, start_date), \
                end_date = COALESCE($5, end_date), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_optional(pool)
            .await
    }

    /// Archive a project (soft delete). Child milestones and tasks are
    /// retained. Returns `true` if the project exists.
    pub async fn archive(pool: &PgPool, id: Id) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE projects SET archived = TRUE, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a project with the given ID exists.
    pub async fn exists(pool: &PgPool, id: Id) -> Result<bool, sqlx::Error> {
        let found: Option<(Id,)> = sqlx::query_as("SELECT id FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(found.is_some())
    }

    /// Add a user to a project's member list. Idempotent.
    pub async fn add_member(pool: &PgPool, project_id: Id, user_id: Id) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO project_members (project_id, user_id) \
             VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(project_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
