//! Template store adapters.

mod directory;

pub use directory::DirectoryStore;
