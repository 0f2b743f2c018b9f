//! Repository for the `milestones` table.

use planhub_core::types::Id;
use sqlx::PgPool;

use crate::models::milestone::{Milestone, MilestoneInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, due_date, description";

/// Provides milestone access. Milestones are owned by their project and
/// replaced as a set, never merged row-by-row.
pub struct MilestoneRepo;

impl MilestoneRepo {
    /// List all milestones for a project.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: Id,
    ) -> Result<Vec<Milestone>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM milestones WHERE project_id = $1");
        sqlx::query_as::<_, Milestone>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a milestone set inside the caller's transaction, returning
    /// the created rows.
    pub async fn insert_set(
        tx: &mut sqlx::PgConnection,
        project_id: Id,
        inputs: &[MilestoneInput],
    ) -> Result<Vec<Milestone>, sqlx::Error> {
        let query = format!(
            "INSERT INTO milestones (project_id, title, due_date, description) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let mut created = Vec::with_capacity(inputs.len());
        for input in inputs {
            let milestone = sqlx::query_as::<_, Milestone>(&query)
                .bind(project_id)
                .bind(&input.title)
                .bind(input.due_date)
                .bind(&input.description)
                .fetch_one(&mut *tx)
                .await?;
            created.push(milestone);
        }
        Ok(created)
    }

    /// Replace a project's entire milestone set: delete all existing rows
    /// and insert the new set in a single transaction, so a failure leaves
    /// no partial set behind. An empty `inputs` clears all milestones.
    pub async fn replace_for_project(
        pool: &PgPool,
        project_id: Id,
        inputs: &[MilestoneInput],
    ) -> Result<Vec<Milestone>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM milestones WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *tx)
            .await?;

        let created = Self::insert_set(&mut tx, project_id, inputs).await?;

        tx.commit().await?;
        Ok(created)
    }
}
