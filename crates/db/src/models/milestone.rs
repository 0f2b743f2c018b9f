//! Milestone entity model and DTOs.

use chrono::NaiveDate;
use planhub_core::types::Id;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `milestones` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Milestone {
    pub id: Id,
    pub project_id: Id,
    pub title: String,
    pub due_date: NaiveDate,
    pub description: Option<String>,
}

/// Milestone fields as supplied inside a project create/update payload.
/// Milestones have no identity across updates: the stored set is replaced
/// wholesale whenever a new list is supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct MilestoneInput {
    pub title: String,
    pub due_date: NaiveDate,
    pub description: Option<String>,
}
