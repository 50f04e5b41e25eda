//! Database models for project rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Priority assigned to a project when the client does not supply one.
/// Lower values sort first in listings.
pub const DEFAULT_PRIORITY: i64 = 2;

/// Lifecycle label attached to a project.
///
/// The set is closed: a request body carrying any other string fails
/// deserialization before it reaches the service, so stored rows only
/// ever hold these four values. The service never transitions the label
/// on its own.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, utoipa::ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Not yet started; the default for new projects.
    #[default]
    Idea,
    /// Currently being worked on.
    Active,
    /// Finished work.
    Completed,
    /// Kept for reference only.
    Archived,
}

impl ProjectStatus {
    /// Returns the lowercase wire representation of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idea => "idea",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Store-assigned row ID. Never changes once assigned.
    pub id: i64,
    /// Human-readable project title.
    pub title: String,
    /// Free-form description; may be null.
    pub description: Option<String>,
    /// Lifecycle label.
    pub status: ProjectStatus,
    /// Sort key; lower values list first.
    pub priority: i64,
    /// Creation timestamp (UTC). Never changes, including on update.
    pub created_at: DateTime<Utc>,
}

/// The client-writable field set, used by both create and update.
///
/// `id` and `created_at` are deliberately absent: the store assigns the
/// former once and the latter is fixed at creation time.
#[derive(Debug, Clone)]
pub struct ProjectDraft {
    /// Project title.
    pub title: String,
    /// Description; `None` is stored as SQL NULL.
    pub description: Option<String>,
    /// Lifecycle label.
    pub status: ProjectStatus,
    /// Sort key.
    pub priority: i64,
}
