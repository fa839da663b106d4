use serde::Serialize;

use crate::domain::{
    catalog, entities::manifest::DependencySet, error::DomainError,
    value_objects::FrameworkChoice,
};

/// The two user choices that drive one scaffold run.
///
/// Built once both inputs are known; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRequest {
    name: String,
    framework: FrameworkChoice,
}

impl ProjectRequest {
    /// Create a request. The name is passed through untouched apart from
    /// rejecting the empty string.
    pub fn new(name: impl Into<String>, framework: FrameworkChoice) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyProjectName);
        }
        Ok(Self { name, framework })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn framework(&self) -> FrameworkChoice {
        self.framework
    }

    /// Fresh dependency set for this request's framework.
    pub fn dependencies(&self) -> DependencySet {
        catalog::dependencies_for(self.framework)
    }
}
