//! Target directory normalisation and project-name derivation.

use std::fmt;
use std::path::{Path, PathBuf};

/// Directory name used when neither an argument nor an answer supplies one.
pub const DEFAULT_TARGET_DIR: &str = "three-project";

/// A normalised, possibly relative, target directory.
///
/// Invariant: never empty and never ends in a path separator, except for the
/// root path itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetDir(String);

impl TargetDir {
    /// Normalise a raw argument: trim surrounding whitespace and strip
    /// trailing separators. Returns `None` when nothing is left.
    pub fn format(raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        let stripped = trimmed.trim_end_matches(['/', '\\']);
        if stripped.is_empty() {
            // "/" on its own is a real (if unwise) target.
            return (!trimmed.is_empty()).then(|| trimmed[..1].to_string());
        }
        Some(stripped.to_string())
    }

    /// Normalise `raw`, falling back to `default`
    /// when it is unset or empty.
    pub fn resolve(raw: Option<&str>, default: &str) -> Self {
        raw.and_then(Self::format)
            .or_else(|| Self::format(default))
            .map(Self)
            .unwrap_or_else(|| Self(DEFAULT_TARGET_DIR.to_string()))
    }

    /// `true` for `"."`, the current working directory.
    pub fn is_current_dir(&self) -> bool {
        self.0 == "."
    }

    /// The cwd's base name for `"."`, the directory
    /// string itself otherwise.
    pub fn project_name(&self, cwd: &Path) -> String {
        if self.is_current_dir() {
            cwd.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        } else {
            self.0.clone()
        }
    }

    /// Absolute location of the target, relative paths resolved against `cwd`.
    pub fn absolute(&self, cwd: &Path) -> PathBuf {
        if self.is_current_dir() {
            cwd.to_path_buf()
        } else {
            cwd.join(&self.0)
        }
    }

    /// Label used in prompts and messages.
    pub fn describe(&self) -> String {
        if self.is_current_dir() {
            "Current directory".to_string()
        } else {
            format!("Target directory \"{}\"", self.0)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TargetDir {
    fn default() -> Self {
        Self(DEFAULT_TARGET_DIR.to_string())
    }
}

impl fmt::Display for TargetDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for TargetDir {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}
