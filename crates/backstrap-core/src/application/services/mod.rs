//! Application services - orchestrate use cases.
//!
//! `InitService` runs the whole workflow; `Scaffolder` and
//! `ManifestGenerator` are the two phases it drives.

pub mod init;
pub mod manifest;
pub mod scaffold;

pub use init::{InitService, ScaffoldReport, ScaffoldStep};
pub use manifest::ManifestGenerator;
pub use scaffold::{Scaffolder, TreeOutcome};
