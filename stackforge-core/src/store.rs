//! In-memory project store.
//!
//! Owns every project a session has created, plus the "currently open"
//! selection. The store is a plain struct: the application composition
//! root owns one and passes `&mut` references down — no globals, no
//! interior mutability. Nothing is persisted; state lives as long as
//! the store does.
//!
//! # API pattern
//!
//! Every mutating function has two forms:
//! - `fn_at(…, now: DateTime<Utc>)` — explicit timestamp; used in tests
//! - `fn(…)` — stamps with `Utc::now()`, delegates to `_at`
//!
//! Tests must NEVER call the wall-clock wrappers; always use `_at`.

use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::types::{MicroService, Project, ProjectId, ServiceId, UserId};

/// Partial update applied to a project's own fields.
#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Injectable container for all in-memory project state.
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    current: Option<ProjectId>,
    next_id: u64,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // 1. Accessors
    // -----------------------------------------------------------------------

    /// All projects, in creation order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Look up a project by id.
    pub fn project(&self, id: &ProjectId) -> Result<&Project, StoreError> {
        self.projects
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| StoreError::ProjectNotFound { id: id.clone() })
    }

    /// The currently open project, if any.
    pub fn current(&self) -> Option<&Project> {
        let id = self.current.as_ref()?;
        self.projects.iter().find(|p| &p.id == id)
    }

    /// Select (or clear) the currently open project.
    pub fn set_current(&mut self, id: Option<ProjectId>) -> Result<(), StoreError> {
        if let Some(ref id) = id {
            self.project(id)?;
        }
        self.current = id;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // 2. Project CRUD
    // -----------------------------------------------------------------------

    /// Create an empty project and return a reference to it.
    pub fn create_project_at(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> &Project {
        self.next_id += 1;
        let project = Project {
            id: ProjectId(self.next_id.to_string()),
            name: name.into(),
            description: description.into(),
            user_id,
            services: vec![],
            created_at: now,
            updated_at: now,
        };
        log::debug!("create project {} ({})", project.id, project.name);
        self.projects.push(project);
        self.projects.last().expect("just pushed")
    }

    /// `create_project_at` convenience wrapper.
    pub fn create_project(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        user_id: UserId,
    ) -> &Project {
        self.create_project_at(name, description, user_id, Utc::now())
    }

    /// Apply a partial update to a project's own fields.
    pub fn update_project_at(
        &mut self,
        id: &ProjectId,
        updates: ProjectUpdate,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let project = self.project_mut(id)?;
        if let Some(name) = updates.name {
            project.name = name;
        }
        if let Some(description) = updates.description {
            project.description = description;
        }
        project.updated_at = now;
        Ok(())
    }

    /// `update_project_at` convenience wrapper.
    pub fn update_project(
        &mut self,
        id: &ProjectId,
        updates: ProjectUpdate,
    ) -> Result<(), StoreError> {
        self.update_project_at(id, updates, Utc::now())
    }

    /// Remove a project. Clears the current selection if it pointed here.
    pub fn delete_project(&mut self, id: &ProjectId) -> Result<(), StoreError> {
        let index = self
            .projects
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| StoreError::ProjectNotFound { id: id.clone() })?;
        self.projects.remove(index);
        if self.current.as_ref() == Some(id) {
            self.current = None;
        }
        log::debug!("delete project {id}");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // 3. Service CRUD
    // -----------------------------------------------------------------------

    /// Attach a service to a project.
    ///
    /// Service ids are unique within a project; a second service with the
    /// same id is rejected with [`StoreError::DuplicateService`].
    pub fn add_service_at(
        &mut self,
        project_id: &ProjectId,
        service: MicroService,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let project = self.project_mut(project_id)?;
        if project.services.iter().any(|s| s.id == service.id) {
            return Err(StoreError::DuplicateService {
                project_id: project_id.clone(),
                service_id: service.id,
            });
        }
        log::debug!("add service {} to project {project_id}", service.id);
        project.services.push(service);
        project.updated_at = now;
        Ok(())
    }

    /// `add_service_at` convenience wrapper.
    pub fn add_service(
        &mut self,
        project_id: &ProjectId,
        service: MicroService,
    ) -> Result<(), StoreError> {
        self.add_service_at(project_id, service, Utc::now())
    }

    /// Modify a service in place via `f` and bump the project timestamp.
    pub fn update_service_at(
        &mut self,
        project_id: &ProjectId,
        service_id: &ServiceId,
        now: DateTime<Utc>,
        f: impl FnOnce(&mut MicroService),
    ) -> Result<(), StoreError> {
        let project = self.project_mut(project_id)?;
        let service = project
            .services
            .iter_mut()
            .find(|s| &s.id == service_id)
            .ok_or_else(|| StoreError::ServiceNotFound {
                project_id: project_id.clone(),
                service_id: service_id.clone(),
            })?;
        f(service);
        project.updated_at = now;
        Ok(())
    }

    /// `update_service_at` convenience wrapper.
    pub fn update_service(
        &mut self,
        project_id: &ProjectId,
        service_id: &ServiceId,
        f: impl FnOnce(&mut MicroService),
    ) -> Result<(), StoreError> {
        self.update_service_at(project_id, service_id, Utc::now(), f)
    }

    /// Detach a service from a project.
    pub fn remove_service_at(
        &mut self,
        project_id: &ProjectId,
        service_id: &ServiceId,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let project = self.project_mut(project_id)?;
        let index = project
            .services
            .iter()
            .position(|s| &s.id == service_id)
            .ok_or_else(|| StoreError::ServiceNotFound {
                project_id: project_id.clone(),
                service_id: service_id.clone(),
            })?;
        project.services.remove(index);
        project.updated_at = now;
        Ok(())
    }

    /// `remove_service_at` convenience wrapper.
    pub fn remove_service(
        &mut self,
        project_id: &ProjectId,
        service_id: &ServiceId,
    ) -> Result<(), StoreError> {
        self.remove_service_at(project_id, service_id, Utc::now())
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    fn project_mut(&mut self, id: &ProjectId) -> Result<&mut Project, StoreError> {
        self.projects
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| StoreError::ProjectNotFound { id: id.clone() })
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
