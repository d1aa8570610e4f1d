//! Domain types for the stackforge project model.
//!
//! Every entity a user configures in the generator lives here: projects,
//! their microservices, and the per-service configuration blocks
//! (database, data models, JWT, routes, integrations). All types are
//! serializable via serde + serde_yaml; the renderer treats them as
//! read-only input.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::secret::generate_jwt_secret;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed identifier for a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub String);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed identifier for a microservice within a project.
///
/// Ids are free-form strings; the renderer derives port offsets from the
/// leading digits when present (see `stackforge-renderer`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceId(pub String);

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ServiceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ServiceId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed identifier for a user account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Implementation language of a service template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Nodejs,
    Golang,
    Python,
    Rust,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Nodejs => write!(f, "nodejs"),
            Language::Golang => write!(f, "golang"),
            Language::Python => write!(f, "python"),
            Language::Rust => write!(f, "rust"),
        }
    }
}

/// Supported database backends, with their canonical images and ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    #[default]
    Postgresql,
    Mongodb,
    Mysql,
    Redis,
}

impl DatabaseKind {
    /// Docker image emitted in the deployment artifact for this backend.
    pub fn image(self) -> &'static str {
        match self {
            DatabaseKind::Postgresql => "postgres:14",
            DatabaseKind::Mongodb => "mongo:5.0",
            DatabaseKind::Mysql => "mysql:8.0",
            DatabaseKind::Redis => "redis:7.0",
        }
    }

    /// Canonical container port for this backend.
    pub fn port(self) -> u16 {
        match self {
            DatabaseKind::Postgresql => 5432,
            DatabaseKind::Mongodb => 27017,
            DatabaseKind::Mysql => 3306,
            DatabaseKind::Redis => 6379,
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseKind::Postgresql => write!(f, "postgresql"),
            DatabaseKind::Mongodb => write!(f, "mongodb"),
            DatabaseKind::Mysql => write!(f, "mysql"),
            DatabaseKind::Redis => write!(f, "redis"),
        }
    }
}

/// Field type of a data-model attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    String,
    Number,
    Boolean,
    Date,
    Array,
    Object,
}

/// HTTP methods a route can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "POST")]
    Post,
    #[serde(rename = "PUT")]
    Put,
    #[serde(rename = "DELETE")]
    Delete,
    #[serde(rename = "PATCH")]
    Patch,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
            HttpMethod::Put => write!(f, "PUT"),
            HttpMethod::Delete => write!(f, "DELETE"),
            HttpMethod::Patch => write!(f, "PATCH"),
        }
    }
}

/// JWT signing algorithms offered by the service configuration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum JwtAlgorithm {
    #[default]
    HS256,
    HS384,
    HS512,
}

impl fmt::Display for JwtAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JwtAlgorithm::HS256 => write!(f, "HS256"),
            JwtAlgorithm::HS384 => write!(f, "HS384"),
            JwtAlgorithm::HS512 => write!(f, "HS512"),
        }
    }
}

/// Whether an integration targets a sibling service or an outside system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationKind {
    Internal,
    #[default]
    External,
}

impl fmt::Display for IntegrationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrationKind::Internal => write!(f, "internal"),
            IntegrationKind::External => write!(f, "external"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A registered user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Immutable catalog entry describing a language/framework starting point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub github_url: String,
    pub language: Language,
    pub framework: String,
}

/// Database selection for a single service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DatabaseConfig {
    pub kind: DatabaseKind,
    pub connection_url: String,
    pub name: String,
}

/// One typed attribute of a data model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelField {
    pub id: String,
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<String>,
}

/// A named data model with typed fields and role-based access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataModel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub fields: Vec<ModelField>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// JWT signing configuration for a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration: String,
    pub algorithm: JwtAlgorithm,
}

impl JwtConfig {
    /// Build a configuration with a freshly generated secret and the
    /// form defaults (`7d` expiration, HS256).
    pub fn generate() -> Self {
        JwtConfig {
            secret: generate_jwt_secret(),
            expiration: "7d".to_owned(),
            algorithm: JwtAlgorithm::HS256,
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self::generate()
    }
}

/// One HTTP route exposed by a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub id: String,
    pub path: String,
    pub method: HttpMethod,
    #[serde(default)]
    pub middlewares: Vec<String>,
    pub handler: String,
}

/// A connection from one service to another system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceIntegration {
    pub id: String,
    pub name: String,
    pub url: String,
    pub kind: IntegrationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<String>,
}

/// One configured backend service within a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicroService {
    pub id: ServiceId,
    pub name: String,
    pub template: ServiceTemplate,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub models: Vec<DataModel>,
    /// Defaults to a freshly generated secret when absent from input.
    #[serde(default)]
    pub jwt: JwtConfig,
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
    #[serde(default)]
    pub integrations: Vec<ServiceIntegration>,
}

/// Top-level container of services, owned by a user.
///
/// Service ids are unique within a project; `ProjectStore` enforces this
/// on insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub user_id: UserId,
    #[serde(default)]
    pub services: Vec<MicroService>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn newtype_display() {
        assert_eq!(ProjectId::from("p-1").to_string(), "p-1");
        assert_eq!(ServiceId::from("7").to_string(), "7");
        assert_eq!(UserId::from("u-1").to_string(), "u-1");
    }

    #[test]
    fn newtype_equality() {
        let a = ServiceId::from("x");
        let b = ServiceId::from(String::from("x"));
        assert_eq!(a, b);
    }

    #[rstest]
    #[case(DatabaseKind::Postgresql, "postgres:14", 5432)]
    #[case(DatabaseKind::Mongodb, "mongo:5.0", 27017)]
    #[case(DatabaseKind::Mysql, "mysql:8.0", 3306)]
    #[case(DatabaseKind::Redis, "redis:7.0", 6379)]
    fn database_lookup_table(
        #[case] kind: DatabaseKind,
        #[case] image: &str,
        #[case] port: u16,
    ) {
        assert_eq!(kind.image(), image);
        assert_eq!(kind.port(), port);
    }

    #[test]
    fn enum_wire_forms() {
        assert_eq!(serde_yaml::to_string(&DatabaseKind::Mongodb).unwrap().trim(), "mongodb");
        assert_eq!(serde_yaml::to_string(&HttpMethod::Delete).unwrap().trim(), "DELETE");
        assert_eq!(serde_yaml::to_string(&JwtAlgorithm::HS384).unwrap().trim(), "HS384");
        assert_eq!(serde_yaml::to_string(&Language::Golang).unwrap().trim(), "golang");
        assert_eq!(serde_yaml::to_string(&IntegrationKind::Internal).unwrap().trim(), "internal");
    }

    #[test]
    fn jwt_config_generate_has_fresh_secret() {
        let a = JwtConfig::generate();
        let b = JwtConfig::generate();
        assert_eq!(a.expiration, "7d");
        assert_eq!(a.algorithm, JwtAlgorithm::HS256);
        assert_ne!(a.secret, b.secret);
    }

    #[test]
    fn project_serde_roundtrip() {
        let now = Utc::now();
        let project = Project {
            id: ProjectId::from("p-1"),
            name: "Shop".to_owned(),
            description: "storefront".to_owned(),
            user_id: UserId::from("u-1"),
            services: vec![],
            created_at: now,
            updated_at: now,
        };
        let yaml = serde_yaml::to_string(&project).expect("serialize");
        let back: Project = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(back, project);
    }

    #[test]
    fn minimal_service_yaml_fills_defaults() {
        let yaml = r#"
id: "1"
name: auth
template:
  id: rust-actix
  name: Actix Web API
  description: High-performance Rust REST API using Actix Web
  github_url: https://github.com/templates/actix-web-api
  language: rust
  framework: Actix Web
"#;
        let svc: MicroService = serde_yaml::from_str(yaml).expect("deserialize");
        assert_eq!(svc.database.kind, DatabaseKind::Postgresql);
        assert_eq!(svc.jwt.secret.len(), 64);
        assert!(svc.models.is_empty());
        assert!(svc.routes.is_empty());
    }
}
