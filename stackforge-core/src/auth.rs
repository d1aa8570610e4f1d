//! Pluggable authentication.
//!
//! The login gate is a seam, not a feature: anything that can map an
//! email/password pair to a [`User`] can sit behind it. The shipped
//! implementation is a configuration-driven credential list; production
//! deployments substitute their own [`Authenticator`].

use chrono::{DateTime, Utc};

use crate::error::AuthError;
use crate::types::{User, UserId};

/// Anything that can authenticate an email/password pair.
pub trait Authenticator {
    fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError>;
}

/// One configured login.
#[derive(Debug, Clone)]
pub struct Credential {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl Credential {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Credential {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }
}

/// Authenticator backed by a fixed credential list.
#[derive(Debug, Default)]
pub struct StaticAuthenticator {
    credentials: Vec<Credential>,
    created_at: Option<DateTime<Utc>>,
}

impl StaticAuthenticator {
    pub fn new(credentials: Vec<Credential>) -> Self {
        StaticAuthenticator { credentials, created_at: None }
    }

    /// Fix the `created_at` stamped onto authenticated users, for
    /// deterministic tests.
    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }
}

impl Authenticator for StaticAuthenticator {
    fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let index = self
            .credentials
            .iter()
            .position(|c| c.email == email && c.password == password)
            .ok_or(AuthError::InvalidCredentials)?;
        let credential = &self.credentials[index];
        Ok(User {
            id: UserId((index + 1).to_string()),
            email: credential.email.clone(),
            name: credential.name.clone(),
            created_at: self.created_at.unwrap_or_else(Utc::now),
        })
    }
}
