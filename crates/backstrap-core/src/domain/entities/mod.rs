pub mod common;
pub mod manifest;
pub mod plan;
pub mod request;

pub use crate::domain::DomainError;
pub use manifest::{DependencySet, ProjectManifest};
pub use plan::ScaffoldPlan;
pub use request::ProjectRequest;
