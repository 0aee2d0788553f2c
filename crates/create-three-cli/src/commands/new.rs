//! Scaffolding, the default command.
//!
//! Responsibility: turn flags and config into a `FlowInput`, let the core
//! prompt flow fill in the gaps, call the scaffold service, and display
//! results. No business logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use create_three_adapters::{DirectoryStore, LocalFilesystem, TemplateRoot};
use create_three_core::{
    application::{
        FlowInput, PromptFlow, ScaffoldPlan, ScaffoldReport, ScaffoldService, ports::Prompter,
    },
    domain::{FsEntry, PrepareAction, TemplateId},
};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompter::select_prompter,
};

/// What a run produced.
#[derive(Debug)]
pub enum Outcome {
    /// `--dry-run`: the plan, nothing written.
    Planned(ScaffoldPlan),
    Created(ScaffoldReport),
}

/// Execute the scaffold command.
///
/// Dispatch sequence:
/// 1. Locate the templates directory
/// 2. Run the prompt flow for whatever the flags left open
/// 3. Plan (`--dry-run`) or materialize via `ScaffoldService`
/// 4. Print the next steps
#[instrument(skip_all, fields(target = args.target_dir.as_deref().unwrap_or("")))]
pub fn execute(args: NewArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir().map_err(|e| CliError::IoError {
        message: "Failed to read the current directory".into(),
        source: e,
    })?;

    let templates = templates_root(&args, config, &cwd);
    let prompter = select_prompter(args.no_interactive, output.supports_color());

    match scaffold(&args, config, &cwd, &templates, prompter.as_ref(), output)? {
        Outcome::Planned(plan) => print_plan(&plan, output)?,
        Outcome::Created(report) => print_report(&report, &config.output.package_manager, output)?,
    }
    Ok(())
}

/// Resolve the template root: flag, then config, then discovery.
pub fn templates_root(args: &NewArgs, config: &AppConfig, cwd: &Path) -> PathBuf {
    TemplateRoot::from_env()
        .with_cwd(cwd)
        .with_explicit(args.templates_dir.clone())
        .with_configured(config.templates.directory.clone())
        .resolve()
}

/// Collect answers and plan or write the project.
pub fn scaffold(
    args: &NewArgs,
    config: &AppConfig,
    cwd: &Path,
    templates: &Path,
    prompter: &dyn Prompter,
    output: &OutputManager,
) -> CliResult<Outcome> {
    let filesystem = LocalFilesystem::new();

    let input = FlowInput {
        target_dir: args.target_dir.clone(),
        template: args.template.clone(),
        overwrite: args.overwrite.map(Into::into),
        package_name: args.package_name.clone(),
        default_target_dir: config.defaults.target_dir.clone(),
        default_template: default_template(config)?,
        cwd: cwd.to_path_buf(),
    };
    let request = PromptFlow::new(prompter, &filesystem).run(input)?;
    debug!(
        template = %request.template,
        target = %request.target_dir,
        package = %request.package_name,
        "Answers collected"
    );

    let service = ScaffoldService::new(
        Box::new(DirectoryStore::new(templates)),
        Box::new(filesystem),
    );

    if args.dry_run {
        return Ok(Outcome::Planned(service.plan(&request)?));
    }

    let root = request.target_dir.absolute(&request.cwd);
    output.print("")?;
    output.print(&format!("Scaffolding project in {}...", root.display()))?;

    let spinner = output.spinner("Writing template files...");
    let result = service.materialize(&request);
    spinner.finish_and_clear();

    let report = result?;
    info!(root = %report.root.display(), files = report.files_written, "Project created");
    Ok(Outcome::Created(report))
}

fn default_template(config: &AppConfig) -> CliResult<Option<TemplateId>> {
    config
        .defaults
        .template
        .as_deref()
        .map(|raw| {
            raw.parse::<TemplateId>().map_err(|e| CliError::ConfigError {
                message: format!("defaults.template: {e}"),
                source: Some(Box::new(e)),
            })
        })
        .transpose()
}

fn print_report(
    report: &ScaffoldReport,
    package_manager: &str,
    output: &OutputManager,
) -> CliResult<()> {
    if let Some(notice) = report.notice {
        output.warning(notice)?;
    }

    output.print("")?;
    output.success("Done🎉. Now run:")?;
    output.print("")?;
    for command in report.next_steps.commands(package_manager) {
        output.print(&format!("  {command}"))?;
    }
    output.print("")?;
    Ok(())
}

fn print_plan(plan: &ScaffoldPlan, output: &OutputManager) -> CliResult<()> {
    let root = plan.structure.root();

    output.header("Dry run: nothing was written")?;
    output.info(&format!(
        "Would scaffold '{}' into {}",
        plan.requested,
        root.display()
    ))?;
    if let Some(notice) = plan.notice {
        output.warning(notice)?;
    }
    output.info(&format!("Target: {}", describe(plan.prepare)))?;

    for entry in plan.structure.entries() {
        let line = match entry {
            FsEntry::Directory(dir) => format!("  + {}/", dir.path.display()),
            FsEntry::File(file) => format!("  + {} ({} bytes)", file.path.display(), file.size()),
        };
        output.print(&line)?;
    }
    Ok(())
}

fn describe(action: PrepareAction) -> &'static str {
    match action {
        PrepareAction::CreateDirectory => "create the directory",
        PrepareAction::ClearContents => "remove existing files (keeping .git)",
        PrepareAction::KeepExisting => "write into the existing directory",
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
