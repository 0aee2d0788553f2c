//! Application layer.
//!
//! - **Services**: `ScaffoldService` (materializer) and `TemplateService`
//! - **Prompt flow**: the ordered question list that produces a request
//! - **Ports**: traits for the filesystem, template storage and the terminal
//! - **Errors**: orchestration failures
//!
//! Business rules live in `crate::domain`; nothing here touches the disk
//! directly.

pub mod error;
pub mod ports;
pub mod prompt_flow;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use error::ApplicationError;
pub use ports::{Filesystem, Prompter, TemplateStore};
pub use prompt_flow::{FlowInput, FlowState, PromptFlow, PromptStep, STEPS, StepKind};
pub use services::{
    NextSteps, ScaffoldPlan, ScaffoldReport, ScaffoldRequest, ScaffoldService, TemplateInfo,
    TemplateService,
};
