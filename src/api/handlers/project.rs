//! Project CRUD handlers: list, create, read, update, delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{ProjectDto, ProjectPayload};
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};
use crate::persistence::models::ProjectDraft;

/// `GET /projects` — List all projects.
///
/// Ordered by priority ascending, then creation time ascending. No
/// pagination, no filtering.
///
/// # Errors
///
/// Returns an [`ApiError`] on internal failures.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "Projects",
    summary = "List projects",
    description = "Returns every project, ordered by priority ascending with creation time as the tie-break.",
    responses(
        (status = 200, description = "All projects", body = Vec<ProjectDto>),
    )
)]
pub async fn list_projects(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let projects = state.project_service.list_projects().await?;
    let data: Vec<ProjectDto> = projects.into_iter().map(ProjectDto::from).collect();
    Ok(Json(data))
}

/// `POST /projects` — Create a new project.
///
/// # Errors
///
/// Returns an [`ApiError`] on internal failures.
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "Projects",
    summary = "Create a project",
    description = "Creates a project from the given fields. Omitted description/status/priority take their defaults; any client-supplied `id` or `created_at` is ignored.",
    request_body = ProjectPayload,
    responses(
        (status = 201, description = "Project created", body = ProjectDto),
        (status = 422, description = "Malformed payload"),
    )
)]
pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<ProjectPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let project = state
        .project_service
        .create_project(ProjectDraft::from(payload))
        .await?;
    Ok((StatusCode::CREATED, Json(ProjectDto::from(project))))
}

/// `GET /projects/:id` — Get a single project.
///
/// # Errors
///
/// Returns [`ApiError::ProjectNotFound`] if the project does not exist.
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "Projects",
    summary = "Get a project",
    params(
        ("id" = i64, Path, description = "Project ID"),
    ),
    responses(
        (status = 200, description = "Project details", body = ProjectDto),
        (status = 404, description = "Project not found", body = ErrorResponse),
    )
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let project = state.project_service.read_project(id).await?;
    Ok(Json(ProjectDto::from(project)))
}

/// `PUT /projects/:id` — Replace a project.
///
/// Full replacement, not a patch: the stored `title`, `description`,
/// `status`, and `priority` become exactly the payload values; `id` and
/// `created_at` are preserved.
///
/// # Errors
///
/// Returns [`ApiError::ProjectNotFound`] if the project does not exist.
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "Projects",
    summary = "Replace a project",
    params(
        ("id" = i64, Path, description = "Project ID"),
    ),
    request_body = ProjectPayload,
    responses(
        (status = 200, description = "Updated project", body = ProjectDto),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 422, description = "Malformed payload"),
    )
)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProjectPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let project = state
        .project_service
        .update_project(id, ProjectDraft::from(payload))
        .await?;
    Ok(Json(ProjectDto::from(project)))
}

/// `DELETE /projects/:id` — Permanently delete a project.
///
/// # Errors
///
/// Returns [`ApiError::ProjectNotFound`] if the project does not exist,
/// including on a second delete of the same ID.
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "Projects",
    summary = "Delete a project",
    params(
        ("id" = i64, Path, description = "Project ID"),
    ),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 404, description = "Project not found", body = ErrorResponse),
    )
)]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.project_service.delete_project(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Project management routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
}
