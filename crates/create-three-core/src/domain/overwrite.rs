//! Overwrite policy for an existing target directory.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{directory_state::DirectoryState, error::DomainError};

/// The operator's answer to "target is not empty, how to proceed?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverwriteDecision {
    /// Remove existing files and continue.
    ReplaceAll,
    /// Cancel the operation.
    Cancel,
    /// Keep existing files and write the template over them.
    MergeIgnoreExisting,
}

impl OverwriteDecision {
    /// Prompt order; the first entry is the initial selection.
    pub const ALL: [Self; 3] = [Self::ReplaceAll, Self::Cancel, Self::MergeIgnoreExisting];

    /// Canonical `--overwrite` value.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ReplaceAll => "yes",
            Self::Cancel => "no",
            Self::MergeIgnoreExisting => "ignore",
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Self::ReplaceAll => "Remove existing files and continue",
            Self::Cancel => "Cancel operation",
            Self::MergeIgnoreExisting => "Ignore files and continue",
        }
    }
}

impl fmt::Display for OverwriteDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do with the target directory before writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrepareAction {
    /// Create the directory (and parents).
    CreateDirectory,
    /// Remove existing contents, keeping ignorable entries such as `.git`.
    ClearContents,
    /// Leave the directory as it is.
    KeepExisting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteOutcome {
    Proceed(PrepareAction),
    Abort,
}

/// Combine the directory state with the operator's
/// decision.
///
/// A non-empty directory is never replaced without an explicit
/// [`OverwriteDecision`]; a missing decision is an error rather than a
/// default.
pub fn resolve_overwrite(
    state: DirectoryState,
    target: &str,
    decision: Option<OverwriteDecision>,
) -> Result<OverwriteOutcome, DomainError> {
    let action = match state {
        DirectoryState::Missing => PrepareAction::CreateDirectory,
        // Nothing to lose; a pre-supplied decision is not consulted.
        DirectoryState::Empty | DirectoryState::OnlyIgnorable => PrepareAction::KeepExisting,
        DirectoryState::NonEmpty => match decision {
            None => {
                return Err(DomainError::OverwriteChoiceRequired {
                    target: target.to_string(),
                });
            }
            Some(OverwriteDecision::Cancel) => return Ok(OverwriteOutcome::Abort),
            Some(OverwriteDecision::ReplaceAll) => PrepareAction::ClearContents,
            Some(OverwriteDecision::MergeIgnoreExisting) => PrepareAction::KeepExisting,
        },
    };
    Ok(OverwriteOutcome::Proceed(action))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_flag_values() {
        let shown: Vec<String> = OverwriteDecision::ALL.iter().map(|d| d.to_string()).collect();
        assert_eq!(shown, ["yes", "no", "ignore"]);
    }

    #[test]
    fn missing_dir_is_created() {
        assert_eq!(
            resolve_overwrite(DirectoryState::Missing, "x", None).unwrap(),
            OverwriteOutcome::Proceed(PrepareAction::CreateDirectory)
        );
    }

    #[test]
    fn empty_dir_needs_no_decision() {
        for state in [DirectoryState::Empty, DirectoryState::OnlyIgnorable] {
            for decision in [None, Some(OverwriteDecision::Cancel)] {
                assert_eq!(
                    resolve_overwrite(state, "x", decision).unwrap(),
                    OverwriteOutcome::Proceed(PrepareAction::KeepExisting)
                );
            }
        }
    }

    #[test]
    fn non_empty_without_decision_is_an_error() {
        assert!(matches!(
            resolve_overwrite(DirectoryState::NonEmpty, "demo", None),
            Err(DomainError::OverwriteChoiceRequired { target }) if target == "demo"
        ));
    }

    #[test]
    fn non_empty_follows_decision() {
        let state = DirectoryState::NonEmpty;
        assert_eq!(
            resolve_overwrite(state, "x", Some(OverwriteDecision::Cancel)).unwrap(),
            OverwriteOutcome::Abort
        );
        assert_eq!(
            resolve_overwrite(state, "x", Some(OverwriteDecision::ReplaceAll)).unwrap(),
            OverwriteOutcome::Proceed(PrepareAction::ClearContents)
        );
        assert_eq!(
            resolve_overwrite(state, "x", Some(OverwriteDecision::MergeIgnoreExisting)).unwrap(),
            OverwriteOutcome::Proceed(PrepareAction::KeepExisting)
        );
    }
}
