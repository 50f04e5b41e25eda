//! Project DTOs for create, read, update, and list operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::persistence::models::{DEFAULT_PRIORITY, Project, ProjectDraft, ProjectStatus};

/// Request body for `POST /api/projects` and `PUT /api/projects/{id}`.
///
/// Only `title` is required. An explicit JSON `null` counts the same as
/// an omitted field for the optional members. `id` and `created_at` are
/// not part of the payload: values a client sends for them are dropped
/// during deserialization.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct ProjectPayload {
    /// Project title.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Lifecycle label; defaults to `idea`.
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    /// Sort key; defaults to 2. Lower values list first.
    #[serde(default)]
    pub priority: Option<i64>,
}

impl From<ProjectPayload> for ProjectDraft {
    fn from(payload: ProjectPayload) -> Self {
        Self {
            title: payload.title,
            description: payload.description,
            status: payload.status.unwrap_or_default(),
            priority: payload.priority.unwrap_or(DEFAULT_PRIORITY),
        }
    }
}

/// A single project in API responses.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ProjectDto {
    /// Store-assigned project ID.
    pub id: i64,
    /// Project title.
    pub title: String,
    /// Free-form description; may be null.
    pub description: Option<String>,
    /// Lifecycle label.
    pub status: ProjectStatus,
    /// Sort key; lower values list first.
    pub priority: i64,
    /// Creation timestamp (RFC 3339, UTC).
    pub created_at: DateTime<Utc>,
}

impl From<Project> for ProjectDto {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            title: project.title,
            description: project.description,
            status: project.status,
            priority: project.priority,
            created_at: project.created_at,
        }
    }
}
