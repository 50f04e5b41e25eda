//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All project endpoints are mounted under `/api`; system endpoints
//! (health) live at the root so load balancers can reach them without
//! the prefix.

pub mod dto;
pub mod handlers;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes())
}
