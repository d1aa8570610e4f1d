//! # stackforge-renderer
//!
//! Tera-based renderer that turns a configured [`Project`] into three
//! deployment text artifacts: a Docker Compose manifest, a set of
//! Kubernetes resources, and a flat environment-variable listing.
//!
//! The renderer is pure — it returns strings and performs no I/O; the
//! caller decides whether to print, copy, or write them.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stackforge_renderer::{ArtifactKind, Renderer};
//! use stackforge_core::types::Project;
//!
//! fn preview(project: &Project) {
//!     if let Ok(renderer) = Renderer::new() {
//!         if let Ok(config) = renderer.render(project) {
//!             for kind in ArtifactKind::all() {
//!                 println!("## {}\n{}", kind.label(), config.artifact(*kind));
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! [`Project`]: stackforge_core::types::Project

pub mod context;
pub mod engine;
pub mod error;

pub use context::{RenderContext, ServiceContext};
pub use engine::{ArtifactKind, RenderedConfig, Renderer};
pub use error::RenderError;
