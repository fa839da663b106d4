//! Infrastructure adapters for backstrap.
//!
//! This crate implements the ports defined in `backstrap-core::application::ports`.
//! It contains all filesystem and environment access.

pub mod filesystem;
pub mod prompter;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompter::{EnvPrompter, ScriptedPrompter};
