//! Application services - orchestrate use cases.

pub mod scaffold_service;
pub mod template_service;

pub use scaffold_service::{
    NextSteps, ScaffoldPlan, ScaffoldReport, ScaffoldRequest, ScaffoldService,
};
pub use template_service::{TemplateInfo, TemplateService};
