//! `stackforge render <project.yaml> [--out <dir>] [--artifact ...] [--json]`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use stackforge_core::types::Project;
use stackforge_renderer::{ArtifactKind, RenderedConfig, Renderer};

use super::super::ArtifactArg;

/// Render deployment artifacts from a project definition file.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to the project definition (YAML).
    pub file: PathBuf,

    /// Write `<project>-docker.yml`, `<project>-kubernetes.yml`, and
    /// `<project>-env.yml` into this directory instead of printing.
    #[arg(long, short = 'o', value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Print a single artifact: docker | kubernetes | env.
    #[arg(long, short = 'a', conflicts_with = "out")]
    pub artifact: Option<ArtifactArg>,

    /// Print all artifacts as one JSON object.
    #[arg(long, conflicts_with_all = ["out", "artifact"])]
    pub json: bool,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let contents = fs::read_to_string(&self.file)
            .with_context(|| format!("cannot read project file '{}'", self.file.display()))?;
        let project: Project = serde_yaml::from_str(&contents)
            .with_context(|| format!("invalid project definition '{}'", self.file.display()))?;

        let renderer = Renderer::new().context("failed to load embedded templates")?;
        let config = renderer
            .render(&project)
            .with_context(|| format!("failed to render project '{}'", project.name))?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&config)?);
            return Ok(());
        }

        if let Some(artifact) = self.artifact {
            println!("{}", config.artifact(artifact.into()));
            return Ok(());
        }

        match self.out {
            Some(dir) => write_artifacts(&dir, &project.name, &config),
            None => {
                print_all(&config);
                Ok(())
            }
        }
    }
}

fn write_artifacts(dir: &Path, project_name: &str, config: &RenderedConfig) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("cannot create output directory '{}'", dir.display()))?;
    for kind in ArtifactKind::all() {
        let path = dir.join(kind.output_filename(project_name));
        // Artifacts end without a newline; written files get one.
        let content = format!("{}\n", config.artifact(*kind));
        fs::write(&path, content)
            .with_context(|| format!("cannot write '{}'", path.display()))?;
        println!("{} Wrote {}", "✓".green(), path.display());
    }
    Ok(())
}

fn print_all(config: &RenderedConfig) {
    for kind in ArtifactKind::all() {
        println!("{}", format!("# --- {} ---", kind.label()).bold());
        println!("{}", config.artifact(*kind));
        println!();
    }
}
