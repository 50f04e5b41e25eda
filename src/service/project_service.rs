//! Project service: orchestrates CRUD operations over the project store.

use crate::error::ApiError;
use crate::persistence::models::{Project, ProjectDraft, ProjectStatus};
use crate::persistence::sqlite::SqliteStore;

/// Title of the record inserted into an empty store at first startup.
const SEED_TITLE: &str = "Welcome: Example Project";
const SEED_DESCRIPTION: &str = "This project was created as a starter sample.";

/// Orchestration layer for all project operations.
///
/// Stateless coordinator: owns the [`SqliteStore`] handle and delegates
/// each operation as one unit of work. Every mutation logs a tracing
/// event with the affected row ID.
#[derive(Debug, Clone)]
pub struct ProjectService {
    store: SqliteStore,
}

impl ProjectService {
    /// Creates a new `ProjectService`.
    #[must_use]
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    /// Inserts the one-time starter record when the store is empty.
    /// Called once at startup, after the schema exists; a non-empty
    /// store makes this a no-op.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on database failure. Fatal at startup.
    pub async fn seed_if_empty(&self) -> Result<(), ApiError> {
        if self.store.count_projects().await? > 0 {
            return Ok(());
        }

        let seed = ProjectDraft {
            title: SEED_TITLE.to_string(),
            description: Some(SEED_DESCRIPTION.to_string()),
            status: ProjectStatus::Active,
            priority: 1,
        };
        let project = self.store.insert_project(&seed).await?;
        tracing::info!(id = project.id, "seeded starter project");
        Ok(())
    }

    /// Returns all projects ordered by priority ascending, then creation
    /// time ascending. Always succeeds; the list may be empty.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on database failure.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.store.list_projects().await
    }

    /// Creates a project from the given draft and returns the stored
    /// record with its assigned `id` and `created_at`.
    ///
    /// An absent description is coerced to the empty string here; the
    /// status and priority defaults are applied when the request body is
    /// parsed. Client-supplied `id`/`created_at` never reach this layer.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on database failure.
    pub async fn create_project(&self, draft: ProjectDraft) -> Result<Project, ApiError> {
        let draft = ProjectDraft {
            description: Some(draft.description.unwrap_or_default()),
            ..draft
        };
        let project = self.store.insert_project(&draft).await?;
        tracing::info!(id = project.id, "project created");
        Ok(project)
    }

    /// Returns the project with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ProjectNotFound`] if no row matches, or an
    /// [`ApiError`] on database failure.
    pub async fn read_project(&self, id: i64) -> Result<Project, ApiError> {
        self.store.fetch_project(id).await
    }

    /// Replaces `title`, `description`, `status`, and `priority` of an
    /// existing project with exactly the draft values, preserving `id`
    /// and `created_at`. Full replacement, not a patch; last writer wins.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ProjectNotFound`] if no row matches, or an
    /// [`ApiError`] on database failure.
    pub async fn update_project(&self, id: i64, draft: ProjectDraft) -> Result<Project, ApiError> {
        let project = self.store.update_project(id, &draft).await?;
        tracing::info!(id, "project updated");
        Ok(project)
    }

    /// Permanently deletes the project with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ProjectNotFound`] if no row matches, or an
    /// [`ApiError`] on database failure.
    pub async fn delete_project(&self, id: i64) -> Result<(), ApiError> {
        self.store.delete_project(id).await?;
        tracing::info!(id, "project deleted");
        Ok(())
    }
}
