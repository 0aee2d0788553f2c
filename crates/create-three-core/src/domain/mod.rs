//! Core domain layer.
//!
//! Pure rules with no I/O: which templates exist, what a valid package name
//! is, how a target directory is normalised, how an existing directory is
//! classified and when it may be overwritten. All filesystem and terminal
//! concerns are reached through the ports in `crate::application`.

pub mod directory_state;
pub mod error;
pub mod overwrite;
pub mod package_descriptor;
pub mod package_name;
pub mod project_structure;
pub mod registry;
pub mod rename;
pub mod target_dir;
pub mod template;

pub use directory_state::{DirectoryState, IGNORABLE_ENTRIES};
pub use error::{DomainError, ErrorCategory};
pub use overwrite::{OverwriteDecision, OverwriteOutcome, PrepareAction, resolve_overwrite};
pub use package_descriptor::{PACKAGE_DESCRIPTOR, PackageDescriptor};
pub use package_name::PackageName;
pub use project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure};
pub use registry::{
    ColorTag, FRAMEWORKS, FrameworkDef, TemplateId, VariantDef, all_template_ids, locate,
};
pub use rename::{RENAME_TABLE, renamed};
pub use target_dir::{DEFAULT_TARGET_DIR, TargetDir};
pub use template::{TemplateEntry, TemplateTree};
