//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `backstrap-adapters` and the
//! CLI implement these.
//!
//! All ports here are driven (output) ports: the workflow calls them.
//!   - `Filesystem`: directory and file creation
//!   - `Prompter`: the two user choices
//!   - `ProgressReporter`: presentation hooks for each phase

pub mod output;

pub use output::{Filesystem, ProgressReporter, Prompter, SilentProgress};
