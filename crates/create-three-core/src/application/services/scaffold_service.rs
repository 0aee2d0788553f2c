//! Scaffold Service - the materializer.
//!
//! Coordinates one run:
//! 1. Validate the template identifier
//! 2. Classify the target directory and apply the overwrite decision
//! 3. Plan the project (template entries, renames, rewritten `package.json`)
//! 4. Prepare the target directory and write the plan
//!
//! Every check and the whole plan complete before the first mutation, so a
//! rejected run leaves the disk as it was. A write failure halfway through is
//! not rolled back.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateStore},
    },
    domain::{
        DirectoryState, DomainError, FsEntry, OverwriteDecision, OverwriteOutcome,
        PACKAGE_DESCRIPTOR, PackageDescriptor, PackageName, PrepareAction, ProjectStructure,
        TargetDir, TemplateEntry, TemplateId, TemplateTree, renamed, resolve_overwrite,
    },
    error::ScaffoldResult,
};

/// Entries kept when a non-empty target is replaced.
const PRESERVED_ON_REPLACE: &[&str] = &[".git"];

/// Everything the materializer needs to know, with all questions answered.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldRequest {
    /// Raw identifier; checked against the registry before anything else.
    pub template: String,
    pub target_dir: TargetDir,
    /// Directory relative targets are resolved against.
    pub cwd: PathBuf,
    pub package_name: PackageName,
    /// Required when the target turns out to be non-empty.
    pub overwrite: Option<OverwriteDecision>,
}

/// A fully checked run that has not touched the disk yet.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub requested: TemplateId,
    /// The template whose files are written (after fallback).
    pub template: TemplateId,
    pub notice: Option<&'static str>,
    pub directory: DirectoryState,
    pub prepare: PrepareAction,
    pub structure: ProjectStructure,
    pub next_steps: NextSteps,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub requested: TemplateId,
    pub template: TemplateId,
    pub package_name: PackageName,
    pub files_written: usize,
    pub notice: Option<&'static str>,
    pub next_steps: NextSteps,
}

/// Commands the operator runs next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextSteps {
    /// Argument for `cd`, already quoted. `None` when the project is the cwd.
    pub cd: Option<String>,
}

impl NextSteps {
    pub fn new(target: &TargetDir, root: &Path, cwd: &Path) -> Self {
        if target.is_current_dir() || root == cwd {
            return Self { cd: None };
        }
        let relative = root
            .strip_prefix(cwd)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| target.as_str().to_string());
        let cd = if relative.contains(char::is_whitespace) {
            format!("\"{relative}\"")
        } else {
            relative
        };
        Self { cd: Some(cd) }
    }

    /// Full command lines, `cd` first when needed.
    pub fn commands(&self, package_manager: &str) -> Vec<String> {
        let (install, dev) = match package_manager {
            "yarn" => ("yarn".to_string(), "yarn dev".to_string()),
            pm => (format!("{pm} install"), format!("{pm} run dev")),
        };
        self.cd
            .iter()
            .map(|dir| format!("cd {dir}"))
            .chain([install, dev])
            .collect()
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(store: Box<dyn TemplateStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { store, filesystem }
    }

    /// Check the request and build the project in memory without writing.
    #[instrument(
        skip_all,
        fields(template = %request.template, target = %request.target_dir)
    )]
    pub fn plan(&self, request: &ScaffoldRequest) -> ScaffoldResult<ScaffoldPlan> {
        // 1. Template identifier
        let requested: TemplateId = request.template.parse()?;
        let template = requested.fallback();
        let notice = requested.fallback_notice();
        if let Some(notice) = notice {
            warn!(requested = %requested, using = %template, "{notice}");
        }

        // 2. Target directory
        let root = request.target_dir.absolute(&request.cwd);
        let listing = self.filesystem.read_dir_names(&root)?;
        let directory = DirectoryState::classify(listing.as_deref());
        debug!(state = ?directory, root = %root.display(), "Target classified");

        let prepare = match resolve_overwrite(
            directory,
            request.target_dir.as_str(),
            request.overwrite,
        )? {
            OverwriteOutcome::Proceed(action) => action,
            OverwriteOutcome::Abort => return Err(ApplicationError::Cancelled.into()),
        };

        // 3. Template files
        if !self.store.contains(template) {
            return Err(ApplicationError::TemplateUnavailable {
                id: template,
                location: self.store.location(template),
            }
            .into());
        }
        let tree = self.store.load(template)?;
        let structure = build_structure(&tree, &root, &request.package_name)?;
        info!(
            entries = structure.entry_count(),
            template = %template,
            "Project planned"
        );

        Ok(ScaffoldPlan {
            requested,
            template,
            notice,
            directory,
            prepare,
            next_steps: NextSteps::new(&request.target_dir, &root, &request.cwd),
            structure,
        })
    }

    /// Materialize the project described by `request`.
    #[instrument(
        skip_all,
        fields(template = %request.template, target = %request.target_dir)
    )]
    pub fn materialize(&self, request: &ScaffoldRequest) -> ScaffoldResult<ScaffoldReport> {
        let plan = self.plan(request)?;
        let root = plan.structure.root().to_path_buf();

        // 4. Prepare
        match plan.prepare {
            PrepareAction::CreateDirectory => self.filesystem.create_dir_all(&root)?,
            PrepareAction::ClearContents => {
                info!(root = %root.display(), "Emptying target directory");
                self.filesystem
                    .remove_dir_contents(&root, PRESERVED_ON_REPLACE)?;
            }
            PrepareAction::KeepExisting => {}
        }

        // 5. Write
        let files_written = self.write_structure(&plan.structure)?;
        info!(files = files_written, root = %root.display(), "Scaffold completed");

        Ok(ScaffoldReport {
            root,
            requested: plan.requested,
            template: plan.template,
            package_name: request.package_name.clone(),
            files_written,
            notice: plan.notice,
            next_steps: plan.next_steps,
        })
    }

    fn write_structure(&self, structure: &ProjectStructure) -> ScaffoldResult<usize> {
        let root = structure.root();
        let mut written = 0;

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem.create_dir_all(&root.join(&dir.path))?;
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&path, &file.content)?;
                    written += 1;
                }
            }
        }

        Ok(written)
    }
}

/// Template entries with top-level renames applied, followed by the
/// rewritten package descriptor.
fn build_structure(
    tree: &TemplateTree,
    root: &Path,
    package_name: &PackageName,
) -> ScaffoldResult<ProjectStructure> {
    let mut structure = ProjectStructure::new(root);

    for entry in &tree.entries {
        let path = entry.path();
        if path == Path::new(PACKAGE_DESCRIPTOR) {
            continue;
        }
        let destination = rename_top_level(path);
        match entry {
            TemplateEntry::Directory { .. } => structure.add_directory(destination),
            TemplateEntry::File { contents, .. } => {
                structure.add_file(destination, contents.clone());
            }
        }
    }

    let raw = tree.file(PACKAGE_DESCRIPTOR).ok_or_else(|| {
        DomainError::InvalidPackageDescriptor(format!(
            "template '{}' has no {PACKAGE_DESCRIPTOR}",
            tree.id
        ))
    })?;
    let mut descriptor = PackageDescriptor::parse(raw)?;
    descriptor.set_name(package_name);
    structure.add_file(
        PACKAGE_DESCRIPTOR,
        descriptor.to_pretty_string()?.into_bytes(),
    );

    structure.validate()?;
    Ok(structure)
}

fn rename_top_level(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(first) => {
            let name = first.as_os_str().to_string_lossy();
            PathBuf::from(renamed(&name)).join(components.as_path())
        }
        None => path.to_path_buf(),
    }
}
