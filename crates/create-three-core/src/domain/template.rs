//! In-memory view of a template directory.

use std::path::{Path, PathBuf};

use crate::domain::registry::TemplateId;

/// One entry of a template, relative to the template root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateEntry {
    Directory { path: PathBuf },
    File { path: PathBuf, contents: Vec<u8> },
}

impl TemplateEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::Directory { path } | Self::File { path, .. } => path,
        }
    }
}

/// Every file and directory of one template, in depth-first order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateTree {
    pub id: TemplateId,
    pub entries: Vec<TemplateEntry>,
}

impl TemplateTree {
    pub fn new(id: TemplateId) -> Self {
        Self {
            id,
            entries: Vec::new(),
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.entries.push(TemplateEntry::File {
            path: path.into(),
            contents: contents.into(),
        });
        self
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.entries
            .push(TemplateEntry::Directory { path: path.into() });
        self
    }

    /// Contents of a top-level file, if present.
    pub fn file(&self, name: &str) -> Option<&[u8]> {
        self.entries.iter().find_map(|e| match e {
            TemplateEntry::File { path, contents } if path == Path::new(name) => {
                Some(contents.as_slice())
            }
            _ => None,
        })
    }

    pub fn file_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, TemplateEntry::File { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_lookup_is_top_level_only() {
        let tree = TemplateTree::new(TemplateId::Vanilla)
            .with_file("package.json", "{}")
            .with_directory("src")
            .with_file("src/package.json", "nested");

        assert_eq!(tree.file("package.json"), Some(&b"{}"[..]));
        assert_eq!(tree.file_count(), 2);
    }
}
