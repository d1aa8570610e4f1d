//! `stackforge templates`

use anyhow::Result;
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

use stackforge_core::catalog;

/// List the built-in service templates.
#[derive(Args, Debug)]
pub struct TemplatesArgs {
    /// Emit the catalog as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct TemplateRow {
    #[tabled(rename = "id")]
    id: String,
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "language")]
    language: String,
    #[tabled(rename = "framework")]
    framework: String,
}

impl TemplatesArgs {
    pub fn run(self) -> Result<()> {
        let templates = catalog::templates();

        if self.json {
            println!("{}", serde_json::to_string_pretty(templates)?);
            return Ok(());
        }

        let rows: Vec<TemplateRow> = templates
            .iter()
            .map(|t| TemplateRow {
                id: t.id.clone(),
                name: t.name.clone(),
                language: t.language.to_string(),
                framework: t.framework.clone(),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}
