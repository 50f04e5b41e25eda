//! SQLite implementation of the persistence layer.
//!
//! Every public method is one unit of work: a single statement, or an
//! explicit transaction for the read-modify-write operations. sqlx rolls
//! back uncommitted transactions on drop, so every early-return path
//! releases the unit of work.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::models::{Project, ProjectDraft, ProjectStatus};
use crate::error::ApiError;

/// Row tuple for `SELECT id, title, description, status, priority, created_at`.
type ProjectRow = (i64, String, Option<String>, ProjectStatus, i64, DateTime<Utc>);

/// SQLite-backed project store using `sqlx::SqlitePool`.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the `projects` table if it does not exist. Idempotent;
    /// called once at startup, before the server accepts traffic.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::Persistence`] on database failure. This is
    /// fatal at startup: the process must not begin serving.
    pub async fn init_schema(&self) -> Result<(), ApiError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS projects (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT,
                status TEXT NOT NULL DEFAULT 'idea',
                priority INTEGER NOT NULL DEFAULT 2,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| ApiError::Persistence(e.to_string()))?;

        Ok(())
    }

    /// Returns the number of stored projects.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::Persistence`] on database failure.
    pub async fn count_projects(&self) -> Result<i64, ApiError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ApiError::Persistence(e.to_string()))
    }

    /// Loads all projects ordered by priority ascending, creation time
    /// ascending as the tie-break.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::Persistence`] on database failure.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            "SELECT id, title, description, status, priority, created_at FROM projects \
             ORDER BY priority ASC, created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ApiError::Persistence(e.to_string()))?;

        Ok(rows.into_iter().map(row_into_project).collect())
    }

    /// Inserts a new project and returns the stored row, including the
    /// store-assigned `id` and the creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::Persistence`] on database failure.
    pub async fn insert_project(&self, draft: &ProjectDraft) -> Result<Project, ApiError> {
        let created_at = Utc::now();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ApiError::Persistence(e.to_string()))?;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO projects (title, description, status, priority, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id",
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.status)
        .bind(draft.priority)
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| ApiError::Persistence(e.to_string()))?;

        let row = sqlx::query_as::<_, ProjectRow>(
            "SELECT id, title, description, status, priority, created_at FROM projects \
             WHERE id = ?1",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| ApiError::Persistence(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| ApiError::Persistence(e.to_string()))?;

        Ok(row_into_project(row))
    }

    /// Loads a single project by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ProjectNotFound`] if no row matches, or an
    /// [`ApiError::Persistence`] on database failure.
    pub async fn fetch_project(&self, id: i64) -> Result<Project, ApiError> {
        let row = sqlx::query_as::<_, ProjectRow>(
            "SELECT id, title, description, status, priority, created_at FROM projects \
             WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ApiError::Persistence(e.to_string()))?;

        row.map(row_into_project)
            .ok_or(ApiError::ProjectNotFound(id))
    }

    /// Overwrites `title`, `description`, `status`, and `priority` of an
    /// existing row, leaving `id` and `created_at` untouched. Runs as a
    /// read-modify-write pair inside one transaction and returns the
    /// updated row.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ProjectNotFound`] if no row matches, or an
    /// [`ApiError::Persistence`] on database failure.
    pub async fn update_project(&self, id: i64, draft: &ProjectDraft) -> Result<Project, ApiError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ApiError::Persistence(e.to_string()))?;

        let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM projects WHERE id = ?1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| ApiError::Persistence(e.to_string()))?;

        if exists.is_none() {
            return Err(ApiError::ProjectNotFound(id));
        }

        sqlx::query(
            "UPDATE projects SET title = ?1, description = ?2, status = ?3, priority = ?4 \
             WHERE id = ?5",
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.status)
        .bind(draft.priority)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| ApiError::Persistence(e.to_string()))?;

        let row = sqlx::query_as::<_, ProjectRow>(
            "SELECT id, title, description, status, priority, created_at FROM projects \
             WHERE id = ?1",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| ApiError::Persistence(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| ApiError::Persistence(e.to_string()))?;

        Ok(row_into_project(row))
    }

    /// Permanently deletes a project row.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ProjectNotFound`] if no row matches (including
    /// a second delete of the same ID), or an [`ApiError::Persistence`]
    /// on database failure.
    pub async fn delete_project(&self, id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| ApiError::Persistence(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ApiError::ProjectNotFound(id));
        }
        Ok(())
    }
}

fn row_into_project(row: ProjectRow) -> Project {
    let (id, title, description, status, priority, created_at) = row;
    Project {
        id,
        title,
        description,
        status,
        priority,
        created_at,
    }
}
