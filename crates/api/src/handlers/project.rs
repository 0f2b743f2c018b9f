//! Project endpoints: listing, creation, update, archive, and membership.
//!
//! Creation and milestone replacement are transactional so a project is
//! never visible without its initial milestone set. "Deletion" only flips
//! the archived flag; tasks and milestones survive it.

use axum::extract::{Path, Query, State};
use axum::Json;
use planhub_core::error::CoreError;
use planhub_core::types::Id;
use planhub_db::models::project::{CreateProject, ProjectWithMilestones, UpdateProject};
use planhub_db::repositories::{MilestoneRepo, ProjectRepo};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListProjectsQuery {
    /// `?archived=true` lists the archive instead of active projects.
    #[serde(default)]
    pub archived: bool,
}

#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub user_id: Id,
}

/// `GET /api/projects` -- projects the user created or is a member of.
pub async fn list_projects(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListProjectsQuery>,
) -> AppResult<Json<Vec<ProjectWithMilestones>>> {
    let projects = ProjectRepo::list_for_user(&state.pool, auth.user_id, query.archived).await?;

    let mut result = Vec::with_capacity(projects.len());
    for project in projects {
        let milestones = MilestoneRepo::list_for_project(&state.pool, project.id).await?;
        result.push(ProjectWithMilestones {
            project,
            milestones,
        });
    }
    Ok(Json(result))
}

/// `POST /api/projects` -- create a project with its initial milestones.
pub async fn create_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateProject>,
) -> AppResult<Json<ProjectWithMilestones>> {
    if body.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title: must not be empty".into(),
        )));
    }
    if body.end_date < body.start_date {
        return Err(AppError::Core(CoreError::Validation(
            "end_date: must not precede start_date".into(),
        )));
    }

    let mut tx = state.pool.begin().await?;
    let project = ProjectRepo::create(&mut tx, &body, auth.user_id).await?;
    let milestones = match &body.milestones {
        Some(inputs) => MilestoneRepo::insert_set(&mut tx, project.id, inputs).await?,
        None => Vec::new(),
    };
    tx.commit().await?;

    tracing::info!(project_id = %project.id, created_by = %auth.user_id, "Project created");
    Ok(Json(ProjectWithMilestones {
        project,
        milestones,
    }))
}

/// `GET /api/projects/{id}` -- a single project with its milestones.
pub async fn get_project(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Id>,
) -> AppResult<Json<ProjectWithMilestones>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "project",
            id,
        }))?;
    let milestones = MilestoneRepo::list_for_project(&state.pool, id).await?;
    Ok(Json(ProjectWithMilestones {
        project,
        milestones,
    }))
}

/// `PUT /api/projects/{id}` -- partial update. A supplied `milestones`
/// list replaces the stored set wholesale; an absent list leaves it alone.
pub async fn update_project(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Id>,
    Json(body): Json<UpdateProject>,
) -> AppResult<Json<ProjectWithMilestones>> {
    if let (Some(start), Some(end)) = (body.start_date, body.end_date) {
        if end < start {
            return Err(AppError::Core(CoreError::Validation(
                "end_date: must not precede start_date".into(),
            )));
        }
    }

    let project = ProjectRepo::update(&state.pool, id, &body)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "project",
            id,
        }))?;

    let milestones = match &body.milestones {
        Some(inputs) => MilestoneRepo::replace_for_project(&state.pool, id, inputs).await?,
        None => MilestoneRepo::list_for_project(&state.pool, id).await?,
    };

    tracing::info!(project_id = %id, "Project updated");
    Ok(Json(ProjectWithMilestones {
        project,
        milestones,
    }))
}

/// `DELETE /api/projects/{id}` -- archive (soft delete). The project
/// disappears from default listings but remains queryable with
/// `?archived=true`, and its tasks stay intact.
pub async fn archive_project(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Id>,
) -> AppResult<Json<Value>> {
    let archived = ProjectRepo::archive(&state.pool, id).await?;
    if !archived {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "project",
            id,
        }));
    }
    tracing::info!(project_id = %id, "Project archived");
    Ok(Json(json!({ "message": "Project archived" })))
}

/// `POST /api/projects/{id}/members` -- add a user to the project's
/// member list, granting them visibility in their project listing.
/// Idempotent.
pub async fn add_member(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Id>,
    Json(body): Json<AddMemberRequest>,
) -> AppResult<Json<Value>> {
    if !ProjectRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "project",
            id,
        }));
    }
    ProjectRepo::add_member(&state.pool, id, body.user_id).await?;
    tracing::info!(project_id = %id, member_id = %body.user_id, "Member added");
    Ok(Json(json!({ "message": "Member added" })))
}
