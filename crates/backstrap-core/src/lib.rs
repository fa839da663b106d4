//! Backstrap Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the backstrap
//! backend project scaffolder, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          backstrap-cli (CLI)            │
//! │  (Prompter + ProgressReporter adapters) │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (InitService → Scaffolder, Manifest)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Prompter, ProgressReporter)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   backstrap-adapters (Infrastructure)   │
//! │ (LocalFilesystem, EnvPrompter, etc)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use backstrap_core::prelude::*;
//!
//! let service = InitService::new(filesystem, prompter, Box::new(SilentProgress));
//! let report = service.run(Some("my-api".into()), &std::env::current_dir()?)?;
//! println!("created {}", report.project_root.display());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        InitService, ManifestGenerator, ScaffoldReport, ScaffoldStep, Scaffolder,
        ports::{Filesystem, ProgressReporter, Prompter, SilentProgress},
    };
    pub use crate::domain::{
        DependencySet, FrameworkChoice, ProjectManifest, ProjectRequest, ScaffoldPlan,
        dependencies_for,
    };
    pub use crate::error::{BackstrapError, BackstrapResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
