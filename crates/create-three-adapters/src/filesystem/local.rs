//! Local filesystem adapter using std::fs.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use create_three_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ScaffoldError, ScaffoldResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn read_dir_names(&self, path: &Path) -> ScaffoldResult<Option<Vec<String>>> {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(map_io_error(path, e, "read directory")),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(Some(names))
    }

    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> ScaffoldResult<()> {
        fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn remove_dir_contents(&self, path: &Path, keep: &[&str]) -> ScaffoldResult<()> {
        let entries = fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;

        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            let name = entry.file_name();
            if keep.iter().any(|k| name == **k) {
                debug!(entry = %name.to_string_lossy(), "Keeping entry");
                continue;
            }

            let entry_path = entry.path();
            let file_type = entry
                .file_type()
                .map_err(|e| map_io_error(&entry_path, e, "inspect entry"))?;
            let removed = if file_type.is_dir() {
                fs::remove_dir_all(&entry_path)
            } else {
                fs::remove_file(&entry_path)
            };
            removed.map_err(|e| map_io_error(&entry_path, e, "remove entry"))?;
        }

        Ok(())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ScaffoldError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}
