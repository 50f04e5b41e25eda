//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::ProjectService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Project service for all business logic.
    pub project_service: Arc<ProjectService>,
}
