//! Error types for stackforge-renderer.

use thiserror::Error;

/// All errors that can arise from artifact rendering.
///
/// For a structurally valid [`Project`](stackforge_core::types::Project)
/// rendering always succeeds; the only failure source is the template
/// engine itself, which the embedded templates keep out of reach in
/// practice. Failures are still propagated, never panicked.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error (template load or context serialization).
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),
}
