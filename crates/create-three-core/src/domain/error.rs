// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the prompt flow keeps the last validation error around)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("\"{given}\" isn't a valid template (expected one of: {})", .valid.join(", "))]
    UnknownTemplate {
        given: String,
        valid: Vec<&'static str>,
    },

    #[error("invalid package.json name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },

    #[error("invalid package descriptor: {0}")]
    InvalidPackageDescriptor(String),

    #[error("Duplicate path in project structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Project structure is empty")]
    EmptyStructure,

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("{target} is not empty and no overwrite decision was given")]
    OverwriteChoiceRequired { target: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownTemplate { valid, .. } => {
                let mut out = vec!["Available templates:".to_string()];
                out.extend(valid.iter().map(|id| format!("  • {id}")));
                out.push("Example: create-three my-scene --template vanilla".into());
                out
            }
            Self::InvalidPackageName { name, .. } => vec![
                "Package names must be lowercase and URL-safe".into(),
                format!(
                    "Try: --package-name {}",
                    crate::domain::PackageName::sanitize(name)
                ),
            ],
            Self::InvalidPackageDescriptor(_) => vec![
                "The template's package.json could not be parsed".into(),
                "Check the template directory or reinstall create-three".into(),
            ],
            Self::OverwriteChoiceRequired { .. } => vec![
                "Pass --overwrite yes|no|ignore to decide without a prompt".into(),
                "Or run in an interactive terminal to choose".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownTemplate { .. }
            | Self::InvalidPackageName { .. }
            | Self::OverwriteChoiceRequired { .. } => ErrorCategory::Validation,
            Self::InvalidPackageDescriptor(_) => ErrorCategory::Configuration,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}
