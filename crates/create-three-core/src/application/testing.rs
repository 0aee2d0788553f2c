//! In-crate fakes for the driven ports.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::application::ApplicationError;
use crate::application::ports::{Filesystem, TemplateStore};
use crate::domain::{TemplateId, TemplateTree};
use crate::error::ScaffoldResult;

/// `None` marks a directory. Clones share the same tree.
#[derive(Clone, Default)]
pub struct FakeFs {
    nodes: Arc<Mutex<BTreeMap<PathBuf, Option<Vec<u8>>>>>,
}

impl FakeFs {
    pub fn with_dir(self, path: &str) -> Self {
        self.create_dir_all(Path::new(path)).unwrap();
        self
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        let path = Path::new(path);
        self.create_dir_all(path.parent().unwrap()).unwrap();
        self.write_file(path, content.as_bytes()).unwrap();
        self
    }
}

impl FakeFs {
    pub fn exists(&self, path: &Path) -> bool {
        self.nodes.lock().unwrap().contains_key(path)
    }

    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        self.nodes.lock().unwrap().get(path).cloned().flatten()
    }
}

impl Filesystem for FakeFs {
    fn read_dir_names(&self, path: &Path) -> ScaffoldResult<Option<Vec<String>>> {
        let nodes = self.nodes.lock().unwrap();
        if !nodes.contains_key(path) {
            return Ok(None);
        }
        Ok(Some(
            nodes
                .keys()
                .filter(|p| p.parent() == Some(path))
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .collect(),
        ))
    }

    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        let mut nodes = self.nodes.lock().unwrap();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            nodes.entry(ancestor.to_path_buf()).or_insert(None);
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> ScaffoldResult<()> {
        self.nodes
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), Some(content.to_vec()));
        Ok(())
    }

    fn remove_dir_contents(&self, path: &Path, keep: &[&str]) -> ScaffoldResult<()> {
        let mut nodes = self.nodes.lock().unwrap();
        nodes.retain(|p, _| match p.strip_prefix(path) {
            Ok(rel) => match rel.components().next() {
                None => true,
                Some(first) => keep.iter().any(|k| first.as_os_str() == *k),
            },
            Err(_) => true,
        });
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeStore {
    trees: HashMap<TemplateId, TemplateTree>,
}

impl FakeStore {
    pub fn with(mut self, tree: TemplateTree) -> Self {
        self.trees.insert(tree.id, tree);
        self
    }
}

impl TemplateStore for FakeStore {
    fn load(&self, id: TemplateId) -> ScaffoldResult<TemplateTree> {
        self.trees.get(&id).cloned().ok_or_else(|| {
            ApplicationError::TemplateUnavailable { id, location: None }.into()
        })
    }

    fn contains(&self, id: TemplateId) -> bool {
        self.trees.contains_key(&id)
    }
}

pub fn vanilla_tree() -> TemplateTree {
    TemplateTree::new(TemplateId::Vanilla)
        .with_file("package.json", r#"{"name":"template-vanilla","version":"0.0.0","scripts":{"dev":"vite"}}"#)
        .with_file("_gitignore", "node_modules\ndist\n")
        .with_file("index.html", "<!doctype html>\n")
        .with_directory("src")
        .with_file("src/main.js", "import './style.css'\n")
}
