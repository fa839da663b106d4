//! Domain value objects: FrameworkChoice.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO dependency logic. What each choice pulls into the manifest
//! lives in `catalog.rs`. This file's only job is to define the types, their
//! string representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here and to [`FrameworkChoice::ALL`]
//! 2. Add the `as_str`, `label` and `FromStr` arms here
//! 3. Add its package list in `catalog.rs` (the compiler will insist)

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── FrameworkChoice ───────────────────────────────────────────────────────────

/// The backend stack variant the user picks for a new project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameworkChoice {
    #[serde(rename = "express")]
    Express,
    #[serde(rename = "expressMongo")]
    ExpressMongo,
    #[serde(rename = "expressSQL")]
    ExpressSql,
}

impl FrameworkChoice {
    /// Every choice, in the order prompts and listings show them.
    pub const ALL: [Self; 3] = [Self::Express, Self::ExpressMongo, Self::ExpressSql];

    /// Stable identifier, as written in reports and accepted by `FromStr`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Express => "express",
            Self::ExpressMongo => "expressMongo",
            Self::ExpressSql => "expressSQL",
        }
    }

    /// Human label for prompts.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Express => "Express",
            Self::ExpressMongo => "Express + Mongo",
            Self::ExpressSql => "Express + SQL",
        }
    }

    /// Identifiers of every choice, for error messages.
    pub fn identifiers() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::as_str).collect()
    }
}

impl fmt::Display for FrameworkChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrameworkChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "express" => Ok(Self::Express),
            "expressmongo" | "express-mongo" | "mongo" => Ok(Self::ExpressMongo),
            "expresssql" | "express-sql" | "sql" => Ok(Self::ExpressSql),
            _ => Err(DomainError::UnknownFramework {
                value: s.to_owned(),
                available: Self::identifiers(),
            }),
        }
    }
}
