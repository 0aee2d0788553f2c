//! Driven (output) ports.

use std::path::{Path, PathBuf};

use crate::domain::{TemplateId, TemplateTree};
use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by `create_three_adapters::filesystem::LocalFilesystem`.
/// Paths handed to the port are absolute.
pub trait Filesystem: Send + Sync {
    /// Entry names directly under `path`, or `None` when `path` does not exist.
    fn read_dir_names(&self, path: &Path) -> ScaffoldResult<Option<Vec<String>>>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write bytes to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &[u8]) -> ScaffoldResult<()>;

    /// Remove every entry under `path` except those named in `keep`.
    /// The directory itself stays.
    fn remove_dir_contents(&self, path: &Path, keep: &[&str]) -> ScaffoldResult<()>;
}

/// Port for template retrieval.
///
/// Implemented by `create_three_adapters::template_store::DirectoryStore`.
pub trait TemplateStore: Send + Sync {
    /// Load every entry of a template.
    fn load(&self, id: TemplateId) -> ScaffoldResult<TemplateTree>;

    /// Whether files for `id` are available.
    fn contains(&self, id: TemplateId) -> bool;

    /// Where the store looks for `id`, for diagnostics.
    fn location(&self, _id: TemplateId) -> Option<PathBuf> {
        None
    }
}
