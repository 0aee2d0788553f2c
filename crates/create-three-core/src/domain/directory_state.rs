//! Classification of an existing target directory.

/// Entries that do not make a directory count as "non-empty".
pub const IGNORABLE_ENTRIES: &[&str] = &[".git", ".idea", ".vscode"];

/// What is currently at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryState {
    Missing,
    Empty,
    /// Only [`IGNORABLE_ENTRIES`] are present.
    OnlyIgnorable,
    NonEmpty,
}

impl DirectoryState {
    /// Classify from a directory listing; `None` means the path does not exist.
    pub fn classify(entries: Option<&[String]>) -> Self {
        match entries {
            None => Self::Missing,
            Some([]) => Self::Empty,
            Some(names) if names.iter().all(|n| is_ignorable(n)) => Self::OnlyIgnorable,
            Some(_) => Self::NonEmpty,
        }
    }

    /// Only a genuinely non-empty directory needs an overwrite decision.
    pub const fn is_blocking(self) -> bool {
        matches!(self, Self::NonEmpty)
    }

    pub const fn exists(self) -> bool {
        !matches!(self, Self::Missing)
    }
}

pub fn is_ignorable(name: &str) -> bool {
    IGNORABLE_ENTRIES.contains(&name)
}
