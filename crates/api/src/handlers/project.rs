//! Handlers for the `/projects` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use plotline_core::model::{CreateProjectRequest, DeleteProjectRequest, Project, ProjectDetail};
use plotline_core::projects;
use plotline_core::types::DbId;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::CurrentUser;
use crate::response::{Empty, OkResponse};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProjectPayload {
    pub project: ProjectDetail,
}

#[derive(Debug, Serialize)]
pub struct ProjectListPayload {
    pub projects: Vec<Project>,
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<OkResponse<ProjectPayload>>> {
    let Path(id) = path?;
    let project = projects::get_project(state.store(), id).await?;
    Ok(Json(OkResponse::new(ProjectPayload { project })))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<OkResponse<ProjectListPayload>>> {
    let projects = projects::list_projects(state.store(), user.user_id).await?;
    Ok(Json(OkResponse::new(ProjectListPayload { projects })))
}

/// POST /api/v1/projects
///
/// The response does not include the new project; clients re-fetch the list.
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> AppResult<Json<OkResponse<Empty>>> {
    let Json(input) = body?;
    projects::create_project(state.store(), user.user_id, input).await?;
    Ok(Json(OkResponse::empty()))
}

/// DELETE /api/v1/projects
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<DeleteProjectRequest>, JsonRejection>,
) -> AppResult<Json<OkResponse<Empty>>> {
    let Json(input) = body?;
    projects::delete_project(state.store(), user.user_id, input).await?;
    Ok(Json(OkResponse::empty()))
}
