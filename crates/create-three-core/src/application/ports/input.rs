//! Driving (input) port: asking the operator.
//!
//! The prompt flow only describes questions; rendering them, reading keys and
//! colouring choices is the implementation's business.

use thiserror::Error;

use crate::domain::ColorTag;

/// Free-text question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPrompt {
    pub message: String,
    /// Pre-filled answer, accepted as-is on Enter.
    pub initial: Option<String>,
}

/// One selectable line in a [`SelectPrompt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub title: String,
    pub color: Option<ColorTag>,
}

impl Choice {
    pub fn plain(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: None,
        }
    }

    pub fn colored(title: impl Into<String>, color: ColorTag) -> Self {
        Self {
            title: title.into(),
            color: Some(color),
        }
    }
}

/// Pick one of several choices; the answer is an index into `choices`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectPrompt {
    pub message: String,
    pub choices: Vec<Choice>,
    pub initial: usize,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// No terminal to ask on, or prompting was disabled.
    #[error("prompts are not available")]
    Unavailable,

    /// The operator aborted (Ctrl-C or Esc).
    #[error("prompt interrupted")]
    Interrupted,

    #[error("prompt I/O error: {0}")]
    Io(String),
}

/// Port for operator interaction.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    fn text(&self, prompt: &TextPrompt) -> Result<String, PromptError>;

    fn select(&self, prompt: &SelectPrompt) -> Result<usize, PromptError>;
}

/// A prompter that never asks; every question is `Unavailable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl Prompter for NoPrompt {
    fn text(&self, _prompt: &TextPrompt) -> Result<String, PromptError> {
        Err(PromptError::Unavailable)
    }

    fn select(&self, _prompt: &SelectPrompt) -> Result<usize, PromptError> {
        Err(PromptError::Unavailable)
    }
}
