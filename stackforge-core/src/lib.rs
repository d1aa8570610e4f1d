//! Stackforge core library — domain types, project store, template
//! catalog, authentication seam, secrets.
//!
//! Public API surface:
//! - [`types`] — newtypes, enums, and domain structs
//! - [`store`] — injectable in-memory [`ProjectStore`](store::ProjectStore)
//! - [`catalog`] — static service-template catalog
//! - [`auth`] — [`Authenticator`](auth::Authenticator) seam
//! - [`secret`] — JWT secret generation
//! - [`error`] — [`StoreError`], [`AuthError`]

pub mod auth;
pub mod catalog;
pub mod error;
pub mod secret;
pub mod store;
pub mod types;

pub use error::{AuthError, StoreError};
pub use store::{ProjectStore, ProjectUpdate};
pub use types::{
    DataModel, DatabaseConfig, DatabaseKind, FieldKind, HttpMethod, IntegrationKind,
    JwtAlgorithm, JwtConfig, Language, MicroService, ModelField, Project, ProjectId,
    RouteConfig, ServiceId, ServiceIntegration, ServiceTemplate, User, UserId,
};
