//! `create-three --list`: show the registered templates.

use std::path::PathBuf;

use create_three_adapters::{DirectoryStore, TemplateRoot};
use create_three_core::application::{TemplateInfo, TemplateService};

use crate::{
    cli::ListFormat,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    templates_dir: Option<PathBuf>,
    format: ListFormat,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let root = TemplateRoot::from_env()
        .with_explicit(templates_dir)
        .with_configured(config.templates.directory.clone())
        .resolve();

    let service = TemplateService::new(Box::new(DirectoryStore::new(&root)));
    let templates = service.list();

    match format {
        ListFormat::Table => {
            output.header("Available Templates:")?;
            for template in &templates {
                output.print(&table_row(template, output))?;
            }
            output.print("")?;
            output.print(&format!("Templates directory: {}", root.display()))?;
        }

        ListFormat::List => {
            for t in &templates {
                println!("{}", t.id);
            }
        }

        // Bypasses OutputManager: JSON must stay parseable even with --quiet.
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&templates).map_err(|e| {
                CliError::IoError {
                    message: "Failed to serialise template list".into(),
                    source: e.into(),
                }
            })?;
            println!("{json}");
        }
    }

    Ok(())
}

fn table_row(template: &TemplateInfo, output: &OutputManager) -> String {
    let label = match template.variant {
        Some(variant) => format!("{} ({variant})", template.framework),
        None => template.framework.to_string(),
    };
    let mut row = format!(
        "  {:<22} {}",
        template.id.as_str(),
        output.paint(&label, template.color)
    );
    if template.source != template.id {
        row.push_str(&format!("  -> uses {}", template.source));
    }
    if !template.available {
        row.push_str("  [not installed]");
    }
    row
}
