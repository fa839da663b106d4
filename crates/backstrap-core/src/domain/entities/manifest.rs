use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// File name of the generated manifest, relative to the project root.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Version every new project starts at.
pub const MANIFEST_VERSION: &str = "1.0.0";

/// Placeholder `test` script.
pub const TEST_SCRIPT: &str = "echo \"No tests implemented yet.\"";

/// `start` script; launches the placeholder entry point.
pub const START_SCRIPT: &str = "node src/index.js";

/// Package name → version constraint, ordered by package name.
///
/// Built once from the framework catalog and never mutated afterwards, so
/// there is no public `insert`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencySet(BTreeMap<String, String>);

impl DependencySet {
    pub fn get(&self, package: &str) -> Option<&str> {
        self.0.get(package).map(String::as_str)
    }

    pub fn contains(&self, package: &str) -> bool {
        self.0.contains_key(package)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for DependencySet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// `scripts` block of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestScripts {
    pub test: String,
    pub start: String,
}

impl Default for ManifestScripts {
    fn default() -> Self {
        Self {
            test: TEST_SCRIPT.into(),
            start: START_SCRIPT.into(),
        }
    }
}

/// The on-disk project descriptor.
///
/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub scripts: ManifestScripts,
    pub dependencies: DependencySet,
}

impl ProjectManifest {
    pub fn new(project_name: impl Into<String>, dependencies: DependencySet) -> Self {
        let name = project_name.into();
        Self {
            description: format!("{name} project"),
            name,
            version: MANIFEST_VERSION.into(),
            scripts: ManifestScripts::default(),
            dependencies,
        }
    }

    /// Serialize as human-readable JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
