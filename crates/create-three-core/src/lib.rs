//! create-three core
//!
//! Domain rules and use cases for scaffolding three.js starter projects,
//! laid out as ports and adapters:
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │        create-three-cli (binary)         │
//! │   parses flags, implements Prompter      │
//! └────────────────────┬─────────────────────┘
//!                      │ calls
//!                      ▼
//! ┌──────────────────────────────────────────┐
//! │   PromptFlow → ScaffoldService           │
//! │   TemplateService                        │
//! └────────────────────┬─────────────────────┘
//!                      │ uses
//!                      ▼
//! ┌──────────────────────────────────────────┐
//! │   Ports: Filesystem, TemplateStore       │
//! │   implemented in create-three-adapters   │
//! └────────────────────┬─────────────────────┘
//!                      ▼
//! ┌──────────────────────────────────────────┐
//! │   Domain (pure): registry, names,        │
//! │   target dirs, overwrite policy          │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! # use create_three_core::prelude::*;
//! # fn run(store: Box<dyn TemplateStore>, fs: Box<dyn Filesystem>) -> ScaffoldResult<()> {
//! let request = ScaffoldRequest {
//!     template: "vanilla".into(),
//!     target_dir: TargetDir::resolve(Some("my-scene"), DEFAULT_TARGET_DIR),
//!     cwd: std::env::current_dir().unwrap_or_default(),
//!     package_name: PackageName::parse("my-scene")?,
//!     overwrite: None,
//! };
//! let report = ScaffoldService::new(store, fs).materialize(&request)?;
//! println!("{} files written", report.files_written);
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

pub mod prelude {
    pub use crate::application::{
        FlowInput, PromptFlow, ScaffoldReport, ScaffoldRequest, ScaffoldService, TemplateInfo,
        TemplateService,
        ports::{Filesystem, Prompter, TemplateStore},
    };
    pub use crate::domain::{
        DEFAULT_TARGET_DIR, OverwriteDecision, PackageName, TargetDir, TemplateId,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
