//! Core domain layer for backstrap.
//!
//! This module contains pure business logic. All I/O and prompting
//! concerns are handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, terminal, or environment access
//! - **Immutable values**: plans, requests and manifests never change after
//!   construction
//!
// Public API - what the world sees
pub mod catalog;
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    manifest::{
        DependencySet, MANIFEST_FILE_NAME, MANIFEST_VERSION, ManifestScripts, ProjectManifest,
        START_SCRIPT, TEST_SCRIPT,
    },
    plan::{DIRECTORY_PLAN, FILE_PLAN, ScaffoldPlan},
    request::ProjectRequest,
};

pub use catalog::dependencies_for;
pub use error::{DomainError, ErrorCategory};
pub use value_objects::FrameworkChoice;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn framework_parses_identifiers() {
        assert_eq!(
            FrameworkChoice::from_str("express").unwrap(),
            FrameworkChoice::Express
        );
        assert_eq!(
            FrameworkChoice::from_str("expressMongo").unwrap(),
            FrameworkChoice::ExpressMongo
        );
        assert_eq!(
            FrameworkChoice::from_str("expressSQL").unwrap(),
            FrameworkChoice::ExpressSql
        );
    }

    #[test]
    fn framework_parses_aliases() {
        assert_eq!(
            FrameworkChoice::from_str("express-mongo").unwrap(),
            FrameworkChoice::ExpressMongo
        );
        assert_eq!(
            FrameworkChoice::from_str("SQL").unwrap(),
            FrameworkChoice::ExpressSql
        );
    }

    #[test]
    fn unknown_framework_lists_available() {
        let err = FrameworkChoice::from_str("koa").unwrap_err();
        match err {
            DomainError::UnknownFramework { value, available } => {
                assert_eq!(value, "koa");
                assert_eq!(available, vec!["express", "expressMongo", "expressSQL"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn framework_display_round_trips() {
        for choice in FrameworkChoice::ALL {
            assert_eq!(FrameworkChoice::from_str(&choice.to_string()).unwrap(), choice);
        }
    }

    #[test]
    fn framework_serializes_as_identifier() {
        let json = serde_json::to_string(&FrameworkChoice::ExpressSql).unwrap();
        assert_eq!(json, "\"expressSQL\"");
    }

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(FrameworkChoice::ExpressMongo.label(), "Express + Mongo");
    }

    // ========================================================================
    // Error Tests
    // ========================================================================

    #[test]
    fn unknown_framework_is_validation_error() {
        let err = FrameworkChoice::from_str("nope").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("expressMongo")));
    }

    #[test]
    fn plan_errors_are_internal() {
        let err = DomainError::DuplicatePath { path: "src".into() };
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
