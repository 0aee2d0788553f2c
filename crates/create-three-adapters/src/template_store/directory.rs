//! Templates read from `template-<id>` directories on disk.
//!
//! ```text
//! <root>/
//! ├── template-vanilla/
//! │   ├── _gitignore          ← renamed to .gitignore when written
//! │   ├── index.html
//! │   ├── package.json        ← name rewritten when written
//! │   └── src/
//! └── template-react-three-fiber/
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use create_three_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{TemplateId, TemplateTree},
    error::{ScaffoldError, ScaffoldResult},
};

/// Store backed by a directory holding one folder per template.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn template_dir(&self, id: TemplateId) -> PathBuf {
        self.root.join(id.dir_name())
    }
}

impl TemplateStore for DirectoryStore {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn load(&self, id: TemplateId) -> ScaffoldResult<TemplateTree> {
        let dir = self.template_dir(id);
        if !dir.is_dir() {
            return Err(ApplicationError::TemplateUnavailable {
                id,
                location: Some(dir),
            }
            .into());
        }

        let mut tree = TemplateTree::new(id);
        for walk_entry in WalkDir::new(&dir).min_depth(1).sort_by_file_name() {
            let walk_entry = walk_entry.map_err(|e| ApplicationError::FilesystemError {
                path: dir.clone(),
                reason: format!("directory walk error: {e}"),
            })?;
            let abs_path = walk_entry.path();
            let rel_path = abs_path
                .strip_prefix(&dir)
                .map_err(|_| ScaffoldError::Internal {
                    message: format!(
                        "failed to relativise '{}' against '{}'",
                        abs_path.display(),
                        dir.display()
                    ),
                })?
                .to_path_buf();

            let file_type = walk_entry.file_type();
            if file_type.is_dir() {
                tree = tree.with_directory(rel_path);
            } else if file_type.is_file() {
                let contents = fs::read(abs_path).map_err(|e| ApplicationError::FilesystemError {
                    path: abs_path.to_path_buf(),
                    reason: format!("Failed to read template file: {e}"),
                })?;
                tree = tree.with_file(rel_path, contents);
            } else {
                debug!(path = %abs_path.display(), "Skipping special file");
            }
        }

        debug!(files = tree.file_count(), "Template loaded");
        Ok(tree)
    }

    fn contains(&self, id: TemplateId) -> bool {
        self.template_dir(id).is_dir()
    }

    fn location(&self, id: TemplateId) -> Option<PathBuf> {
        Some(self.template_dir(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use create_three_core::domain::TemplateEntry;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn loads_nested_files_in_sorted_order() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("template-vanilla");
        write(&base, "package.json", "{}");
        write(&base, "_gitignore", "node_modules");
        write(&base, "src/main.js", "console.log(1)");
        fs::create_dir_all(base.join("public")).unwrap();

        let tree = DirectoryStore::new(temp.path())
            .load(TemplateId::Vanilla)
            .unwrap();

        let paths: Vec<_> = tree.entries.iter().map(|e| e.path().to_path_buf()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("_gitignore"),
                PathBuf::from("package.json"),
                PathBuf::from("public"),
                PathBuf::from("src"),
                PathBuf::from("src/main.js"),
            ]
        );
        assert!(matches!(tree.entries[2], TemplateEntry::Directory { .. }));
        assert_eq!(tree.file("package.json"), Some(&b"{}"[..]));
    }

    #[test]
    fn missing_template_is_unavailable() {
        let temp = TempDir::new().unwrap();
        let store = DirectoryStore::new(temp.path());

        assert!(!store.contains(TemplateId::ReactThreeFiber));
        let err = store.load(TemplateId::ReactThreeFiber).unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::Application(ApplicationError::TemplateUnavailable { location: Some(_), .. })
        ));
    }

    #[test]
    fn location_points_at_template_dir() {
        let store = DirectoryStore::new("/opt/create-three");
        assert_eq!(
            store.location(TemplateId::ReactThreeFiberTs),
            Some(PathBuf::from("/opt/create-three/template-react-three-fiber-ts"))
        );
    }
}
