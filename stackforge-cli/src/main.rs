//! Stackforge — microservice configuration generator CLI.
//!
//! # Usage
//!
//! ```text
//! stackforge render <project.yaml> [--out <dir>] [--artifact docker|kubernetes|env] [--json]
//! stackforge templates
//! stackforge secret
//! ```

mod commands;

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{render::RenderArgs, secret::SecretArgs, templates::TemplatesArgs};
use stackforge_renderer::ArtifactKind;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "stackforge",
    version,
    about = "Render deployment artifacts for a microservice project definition",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render Docker Compose, Kubernetes, and environment artifacts.
    Render(RenderArgs),

    /// List the built-in service templates.
    Templates(TemplatesArgs),

    /// Generate a fresh JWT signing secret.
    Secret(SecretArgs),
}

// ---------------------------------------------------------------------------
// Shared ArtifactKind argument — parsed from CLI strings
// ---------------------------------------------------------------------------

/// Thin wrapper so clap can parse `ArtifactKind` from CLI args.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactArg(pub ArtifactKind);

impl FromStr for ArtifactArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "docker" => Ok(Self(ArtifactKind::DockerCompose)),
            "kubernetes" => Ok(Self(ArtifactKind::Kubernetes)),
            "env" => Ok(Self(ArtifactKind::Environment)),
            other => Err(format!(
                "unknown artifact '{other}'; expected: docker, kubernetes, env"
            )),
        }
    }
}

impl fmt::Display for ArtifactArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.stem())
    }
}

impl From<ArtifactArg> for ArtifactKind {
    fn from(a: ArtifactArg) -> Self {
        a.0
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => args.run(),
        Commands::Templates(args) => args.run(),
        Commands::Secret(args) => args.run(),
    }
}
