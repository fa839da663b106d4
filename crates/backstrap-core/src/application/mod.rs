//! Use cases of backstrap.
//!
//! [`InitService`] runs the whole workflow; [`Scaffolder`] and
//! [`ManifestGenerator`] are its two writing steps. Everything outside the
//! process (disk, terminal, progress display) is reached through the traits
//! in [`ports`].

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    InitService, ManifestGenerator, ScaffoldReport, ScaffoldStep, Scaffolder, TreeOutcome,
};

pub use ports::{Filesystem, ProgressReporter, Prompter, SilentProgress};

pub use error::ApplicationError;
