//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business rules.
//! Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::TemplateId;
use crate::error::ErrorCategory;

/// Errors that occur while collecting answers or materializing a project.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The operator chose to abort.
    #[error("Operation cancelled")]
    Cancelled,

    /// A known template has no files available on disk.
    #[error("Template '{id}' is not installed{}", .location.as_ref().map(|p| format!(" (looked in {})", p.display())).unwrap_or_default())]
    TemplateUnavailable {
        id: TemplateId,
        location: Option<PathBuf>,
    },

    /// Filesystem operation failed. Nothing is rolled back.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A question had to be asked but no terminal is available.
    #[error("No {field} was given and prompts are disabled")]
    PromptRequired { field: &'static str },

    /// The terminal failed while prompting.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Cancelled => vec!["No files were written".into()],
            Self::TemplateUnavailable { .. } => vec![
                "Point --templates-dir at the directory holding the template-* folders".into(),
                "Or set CREATE_THREE_TEMPLATES_DIR".into(),
                "Run 'create-three --list' to see which templates are installed".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were left in place".into(),
            ],
            Self::PromptRequired { field } => vec![
                format!("Pass the {field} on the command line"),
                "Or run in an interactive terminal".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Cancelled => ErrorCategory::Cancelled,
            Self::TemplateUnavailable { .. } => ErrorCategory::NotFound,
            Self::PromptRequired { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::PromptFailed { .. } => ErrorCategory::Internal,
        }
    }
}
