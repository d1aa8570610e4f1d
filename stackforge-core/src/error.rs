//! Error types for stackforge-core.

use thiserror::Error;

use crate::types::{ProjectId, ServiceId};

/// All errors that can arise from project-store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No project with the given id exists in the store.
    #[error("project not found: {id}")]
    ProjectNotFound { id: ProjectId },

    /// The project exists but contains no service with the given id.
    #[error("service not found: {service_id} in project {project_id}")]
    ServiceNotFound {
        project_id: ProjectId,
        service_id: ServiceId,
    },

    /// A service with this id is already attached to the project.
    #[error("duplicate service id: {service_id} in project {project_id}")]
    DuplicateService {
        project_id: ProjectId,
        service_id: ServiceId,
    },
}

/// Errors from an [`Authenticator`](crate::auth::Authenticator).
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password. Deliberately a single variant:
    /// callers cannot distinguish which half failed.
    #[error("invalid email or password")]
    InvalidCredentials,
}
