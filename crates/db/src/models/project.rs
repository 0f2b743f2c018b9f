//! Project entity model and DTOs.

use chrono::NaiveDate;
use planhub_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::milestone::{Milestone, MilestoneInput};

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: Id,
    pub title: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub archived: bool,
    pub created_by: Id,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project with its milestones attached inline, as returned by the
/// project endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithMilestones {
    #[serde(flatten)]
    pub project: Project,
    pub milestones: Vec<Milestone>,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub milestones: Option<Vec<MilestoneInput>>,
}

/// DTO for updating an existing project. A present `milestones` list
/// replaces the project's entire milestone set.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub milestones: Option<Vec<MilestoneInput>>,
}
