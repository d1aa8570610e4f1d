//! Render context — precomputed per-service values built from [`Project`].
//!
//! Everything with arithmetic or casing in it is resolved here, so the
//! templates stay substitution-only: host ports, database image and
//! canonical port, upper-cased env-var prefixes, the network name.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use stackforge_core::types::{MicroService, Project};

/// Rendering payload for one project.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    pub project_name: String,
    /// Shared compose network, `<lowercased project name>-network`.
    pub network: String,
    /// RFC 3339 with millisecond precision, UTC `Z` suffix.
    pub generated_at: String,
    pub services: Vec<ServiceContext>,
}

/// Precomputed values for one service. Field names match the template
/// placeholders one-to-one.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceContext {
    pub name: String,
    /// Env-var key prefix (`billing` → `BILLING`).
    pub name_upper: String,
    /// Host port of the application container, `3000 + offset`.
    pub app_host_port: u64,
    pub db_image: String,
    /// Host port of the database container, `5432 + offset`.
    pub db_host_port: u64,
    /// Canonical container port of the selected database kind.
    pub db_port: u16,
    pub db_name: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration: String,
}

impl RenderContext {
    /// Build a [`RenderContext`] from a [`Project`] and an explicit
    /// generation timestamp.
    pub fn from_project(project: &Project, generated_at: DateTime<Utc>) -> Self {
        let services = project
            .services
            .iter()
            .enumerate()
            .map(|(ordinal, svc)| ServiceContext::from_service(svc, ordinal))
            .collect();

        RenderContext {
            project_name: project.name.clone(),
            network: format!("{}-network", project.name.to_lowercase()),
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            services,
        }
    }
}

impl ServiceContext {
    fn from_service(svc: &MicroService, ordinal: usize) -> Self {
        let offset = port_offset(&svc.id.0, ordinal);
        ServiceContext {
            name: svc.name.clone(),
            name_upper: svc.name.to_uppercase(),
            app_host_port: 3000 + offset,
            db_image: svc.database.kind.image().to_owned(),
            db_host_port: 5432 + offset,
            db_port: svc.database.kind.port(),
            db_name: svc.database.name.clone(),
            database_url: svc.database.connection_url.clone(),
            jwt_secret: svc.jwt.secret.clone(),
            jwt_expiration: svc.jwt.expiration.clone(),
        }
    }
}

/// Largest offset for which both `3000 + offset` and `5432 + offset`
/// fit in a `u64`.
const MAX_PORT_OFFSET: u64 = u64::MAX - 5432;

/// Port offset of a service within a project.
///
/// The offset is the integer value of the longest leading run of ASCII
/// digits in the service id (leading whitespace ignored). Ids without
/// leading digits, and digit runs too large for the port arithmetic,
/// fall back to the service's ordinal index in the project — the
/// renderer is total over every project shape.
pub(crate) fn port_offset(id: &str, ordinal: usize) -> u64 {
    leading_integer(id).unwrap_or(ordinal as u64)
}

fn leading_integer(s: &str) -> Option<u64> {
    let s = s.trim_start();
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    let digits = &s[..end];
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok().filter(|v| *v <= MAX_PORT_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use stackforge_core::types::{
        DatabaseConfig, DatabaseKind, JwtConfig, ProjectId, ServiceId, UserId,
    };
    use stackforge_core::{catalog, types::JwtAlgorithm};

    #[test]
    fn leading_integer_parses_digit_prefixes() {
        assert_eq!(leading_integer("7"), Some(7));
        assert_eq!(leading_integer("7abc"), Some(7));
        assert_eq!(leading_integer("  42"), Some(42));
        assert_eq!(leading_integer("007"), Some(7));
        assert_eq!(leading_integer("abc"), None);
        assert_eq!(leading_integer(""), None);
        assert_eq!(leading_integer("a7"), None);
    }

    #[test]
    fn overflowing_digit_run_falls_back_to_ordinal() {
        let huge = "99999999999999999999999999999999";
        assert_eq!(leading_integer(huge), None);
        assert_eq!(port_offset(huge, 4), 4);
    }

    #[test]
    fn offset_too_large_for_port_arithmetic_falls_back_to_ordinal() {
        // Parses as u64, but 5432 + offset would not fit.
        let max = u64::MAX.to_string();
        assert_eq!(leading_integer(&max), None);
        assert_eq!(port_offset(&max, 2), 2);
        // The largest admissible offset still goes through.
        let edge = MAX_PORT_OFFSET.to_string();
        assert_eq!(leading_integer(&edge), Some(MAX_PORT_OFFSET));
    }

    #[test]
    fn port_offset_fallback_is_ordinal() {
        assert_eq!(port_offset("abc", 0), 0);
        assert_eq!(port_offset("svc-two", 2), 2);
        assert_eq!(port_offset("3", 9), 3);
    }

    #[test]
    fn context_precomputes_ports_and_casing() {
        let svc = MicroService {
            id: ServiceId::from("7"),
            name: "billing".to_owned(),
            template: catalog::find("node-express-rest").unwrap().clone(),
            database: DatabaseConfig {
                kind: DatabaseKind::Redis,
                connection_url: "redis://cache:6379/0".to_owned(),
                name: "cache".to_owned(),
            },
            models: vec![],
            jwt: JwtConfig {
                secret: "aa".repeat(32),
                expiration: "7d".to_owned(),
                algorithm: JwtAlgorithm::HS256,
            },
            routes: vec![],
            integrations: vec![],
        };
        let project = Project {
            id: ProjectId::from("p-1"),
            name: "Shop".to_owned(),
            description: String::new(),
            user_id: UserId::from("u-1"),
            services: vec![svc],
            created_at: Utc.timestamp_opt(0, 0).unwrap(),
            updated_at: Utc.timestamp_opt(0, 0).unwrap(),
        };

        let ctx = RenderContext::from_project(&project, Utc.timestamp_opt(0, 0).unwrap());
        assert_eq!(ctx.network, "shop-network");
        assert_eq!(ctx.generated_at, "1970-01-01T00:00:00.000Z");
        let svc = &ctx.services[0];
        assert_eq!(svc.app_host_port, 3007);
        assert_eq!(svc.db_host_port, 5439);
        assert_eq!(svc.db_port, 6379);
        assert_eq!(svc.db_image, "redis:7.0");
        assert_eq!(svc.name_upper, "BILLING");
    }
}
