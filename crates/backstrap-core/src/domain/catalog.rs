//! Framework catalog.
//!
//! Maps each [`FrameworkChoice`] to the runtime packages its manifest
//! declares. The mapping is an exhaustive `match`, so every choice has an
//! entry and none can fall through to an empty dependency set.

use crate::domain::{entities::manifest::DependencySet, value_objects::FrameworkChoice};

/// Version constraint written for every catalog package.
pub const DEFAULT_VERSION_CONSTRAINT: &str = "latest";

/// Packages required by a framework choice, in manifest order.
pub const fn packages_for(choice: FrameworkChoice) -> &'static [&'static str] {
    match choice {
        FrameworkChoice::Express => &["express"],
        FrameworkChoice::ExpressMongo => &["express", "mongoose"],
        FrameworkChoice::ExpressSql => &["express", "sequelize"],
    }
}

/// Build the dependency set for a framework choice.
pub fn dependencies_for(choice: FrameworkChoice) -> DependencySet {
    packages_for(choice)
        .iter()
        .map(|package| (*package, DEFAULT_VERSION_CONSTRAINT))
        .collect()
}
