//! Non-interactive prompter adapters.
//!
//! The interactive terminal prompter lives in the CLI crate, next to the
//! terminal stack it depends on.

mod env;
mod scripted;

pub use env::{EnvPrompter, FRAMEWORK_VAR, PROJECT_NAME_VAR};
pub use scripted::ScriptedPrompter;
