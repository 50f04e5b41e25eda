//! Service layer: business logic orchestration.
//!
//! [`ProjectService`] implements the five CRUD operations over the
//! project entity, each as one unit of work against the store.

pub mod project_service;

pub use project_service::ProjectService;
