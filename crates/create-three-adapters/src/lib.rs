//! Infrastructure adapters for create-three.
//!
//! Implements the ports defined in `create_three_core::application::ports`.
//! All I/O lives here.

pub mod filesystem;
pub mod template_root;
pub mod template_store;

pub use filesystem::LocalFilesystem;
pub use template_root::{TEMPLATES_DIR_ENV, TemplateRoot};
pub use template_store::DirectoryStore;
