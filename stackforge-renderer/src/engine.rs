//! Tera rendering engine — [`ArtifactKind`] enum and [`Renderer`].
//!
//! # Artifacts
//!
//! | Artifact      | Content                              | Download name              |
//! |---------------|--------------------------------------|----------------------------|
//! | DockerCompose | multi-service compose manifest       | `<project>-docker.yml`     |
//! | Kubernetes    | Deployment + Service + Secret per svc| `<project>-kubernetes.yml` |
//! | Environment   | flat `KEY=value` listing             | `<project>-env.yml`        |
//!
//! Templates are substitution-only; iteration and block joining happen
//! here, so the rendered text is byte-stable for a fixed input and
//! timestamp.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tera::Tera;

use stackforge_core::types::Project;

use crate::context::{RenderContext, ServiceContext};
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    (
        "compose/manifest.yml.tera",
        include_str!("templates/compose_manifest.yml.tera"),
    ),
    (
        "compose/service.yml.tera",
        include_str!("templates/compose_service.yml.tera"),
    ),
    (
        "k8s/service.yml.tera",
        include_str!("templates/k8s_service.yml.tera"),
    ),
    (
        "env/manifest.env.tera",
        include_str!("templates/env_manifest.env.tera"),
    ),
    (
        "env/service.env.tera",
        include_str!("templates/env_service.env.tera"),
    ),
];

fn build_tera() -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    // Artifacts are plain text; connection URLs must pass through unescaped.
    tera.autoescape_on(vec![]);
    tera.add_raw_templates(TPLS.to_vec())?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// ArtifactKind
// ---------------------------------------------------------------------------

/// The three generated text artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    DockerCompose,
    Kubernetes,
    Environment,
}

impl ArtifactKind {
    /// All artifact variants in a stable order.
    pub fn all() -> &'static [ArtifactKind] {
        &[
            ArtifactKind::DockerCompose,
            ArtifactKind::Kubernetes,
            ArtifactKind::Environment,
        ]
    }

    /// Short stem used in download filenames.
    pub fn stem(&self) -> &'static str {
        match self {
            ArtifactKind::DockerCompose => "docker",
            ArtifactKind::Kubernetes => "kubernetes",
            ArtifactKind::Environment => "env",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::DockerCompose => "Docker Compose",
            ArtifactKind::Kubernetes => "Kubernetes",
            ArtifactKind::Environment => "Environment",
        }
    }

    /// Download filename for a project: `<project name>-<stem>.yml`.
    pub fn output_filename(&self, project_name: &str) -> String {
        format!("{}-{}.yml", project_name, self.stem())
    }
}

// ---------------------------------------------------------------------------
// RenderedConfig
// ---------------------------------------------------------------------------

/// The three rendered artifacts for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedConfig {
    /// Docker-Compose-equivalent multi-service manifest.
    pub deployment: String,
    /// Kubernetes-equivalent per-service resource documents.
    pub orchestration: String,
    /// Flat environment-variable listing.
    pub environment: String,
}

impl RenderedConfig {
    /// The artifact text for a given kind.
    pub fn artifact(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::DockerCompose => &self.deployment,
            ArtifactKind::Kubernetes => &self.orchestration,
            ArtifactKind::Environment => &self.environment,
        }
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Pure renderer from [`Project`] to the three text artifacts.
///
/// Uses embedded templates only. Create once with [`Renderer::new`] and
/// reuse; rendering never mutates the input and performs no I/O.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Construct a new [`Renderer`] with embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer { tera: build_tera()? })
    }

    /// Render all three artifacts, stamping the environment artifact
    /// with the current time. Output is otherwise fully determined by
    /// the project.
    pub fn render(&self, project: &Project) -> Result<RenderedConfig, RenderError> {
        self.render_at(project, Utc::now())
    }

    /// Render with an explicit generation timestamp. Byte-stable: the
    /// same project and timestamp always produce identical artifacts.
    pub fn render_at(
        &self,
        project: &Project,
        generated_at: DateTime<Utc>,
    ) -> Result<RenderedConfig, RenderError> {
        let ctx = RenderContext::from_project(project, generated_at);
        Ok(RenderedConfig {
            deployment: self.render_deployment(&ctx)?,
            orchestration: self.render_orchestration(&ctx)?,
            environment: self.render_environment(&ctx)?,
        })
    }

    // -----------------------------------------------------------------------
    // Per-artifact generation
    // -----------------------------------------------------------------------

    fn render_deployment(&self, ctx: &RenderContext) -> Result<String, RenderError> {
        let mut blocks = Vec::with_capacity(ctx.services.len());
        for svc in &ctx.services {
            let mut tctx = tera::Context::from_serialize(svc)?;
            tctx.insert("network", &ctx.network);
            tctx.insert("env_block", &compose_env_block(svc));
            blocks.push(self.tera.render("compose/service.yml.tera", &tctx)?);
        }

        let volume_lines: Vec<String> = ctx
            .services
            .iter()
            .map(|svc| format!("  {}-db-data:", svc.name))
            .collect();

        let mut tctx = tera::Context::new();
        tctx.insert("service_blocks", &blocks.join("\n\n"));
        tctx.insert("volume_lines", &volume_lines.join("\n"));
        tctx.insert("network", &ctx.network);
        Ok(self.tera.render("compose/manifest.yml.tera", &tctx)?)
    }

    fn render_orchestration(&self, ctx: &RenderContext) -> Result<String, RenderError> {
        let mut blocks = Vec::with_capacity(ctx.services.len());
        for svc in &ctx.services {
            let tctx = tera::Context::from_serialize(svc)?;
            blocks.push(self.tera.render("k8s/service.yml.tera", &tctx)?);
        }
        // No header document: zero services renders to an empty string.
        Ok(blocks.join("\n\n"))
    }

    fn render_environment(&self, ctx: &RenderContext) -> Result<String, RenderError> {
        let mut blocks = Vec::with_capacity(ctx.services.len());
        for svc in &ctx.services {
            let tctx = tera::Context::from_serialize(svc)?;
            blocks.push(self.tera.render("env/service.env.tera", &tctx)?);
        }

        let mut tctx = tera::Context::new();
        tctx.insert("project_name", &ctx.project_name);
        tctx.insert("generated_at", &ctx.generated_at);
        tctx.insert("service_blocks", &blocks.join("\n\n"));
        Ok(self.tera.render("env/manifest.env.tera", &tctx)?)
    }
}

/// Compose environment entries for one service, pre-indented for the
/// `environment:` block of the app service.
fn compose_env_block(svc: &ServiceContext) -> String {
    let entries = [
        format!("DATABASE_URL={}", svc.database_url),
        format!("JWT_SECRET={}", svc.jwt_secret),
        format!("JWT_EXPIRATION={}", svc.jwt_expiration),
        "NODE_ENV=production".to_owned(),
    ];
    entries
        .iter()
        .map(|entry| format!("      - {entry}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
