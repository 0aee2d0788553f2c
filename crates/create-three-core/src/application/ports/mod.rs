//! Application ports (traits) for external dependencies.
//!
//! - **Driven (output) ports**, implemented by `create-three-adapters`:
//!   - `Filesystem`: directory inspection and file writes
//!   - `TemplateStore`: template trees by identifier
//! - **Driving (input) port**, implemented by the CLI:
//!   - `Prompter`: asks the operator a question

pub mod input;
pub mod output;

pub use input::{Choice, NoPrompt, PromptError, Prompter, SelectPrompt, TextPrompt};
pub use output::{Filesystem, TemplateStore};

#[cfg(test)]
pub use input::MockPrompter;
