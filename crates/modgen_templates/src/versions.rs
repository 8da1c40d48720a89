//! Locked toolchain versions.
//!
//! The generated project pins its Minecraft, Fabric and Gradle versions. The
//! table is read once at start-up and passed explicitly into rendering; it is
//! never mutated during a run.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TemplateError, TemplateResult};

/// Version strings consumed verbatim by the template catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockedVersions {
    /// Target Minecraft version (e.g. "1.21.4")
    pub minecraft_version: String,
    /// Yarn mappings build
    pub yarn_mappings: String,
    /// Fabric loader version used for compilation
    pub loader_version: String,
    /// Lowest loader version the mod declares compatibility with
    pub min_loader_version: String,
    /// Fabric API version
    pub fabric_api_version: String,
    /// fabric-loom Gradle plugin version
    pub loom_version: String,
    /// Gradle wrapper distribution version
    pub gradle_version: String,
    /// Java release level
    pub java_version: String,
}

impl Default for LockedVersions {
    fn default() -> Self {
        Self {
            minecraft_version: "1.21.4".to_string(),
            yarn_mappings: "1.21.4+build.4".to_string(),
            loader_version: "0.18.4".to_string(),
            min_loader_version: "0.18.0".to_string(),
            fabric_api_version: "0.119.4+1.21.4".to_string(),
            loom_version: "1.14.9".to_string(),
            gradle_version: "9.3.1".to_string(),
            java_version: "21".to_string(),
        }
    }
}

impl LockedVersions {
    /// Load a version table from a YAML file.
    ///
    /// Keys missing from the file keep their built-in values.
    pub fn from_yaml_file(path: &Path) -> TemplateResult<Self> {
        debug!("Loading locked versions from {:?}", path);
        let content = fs::read_to_string(path).map_err(|e| TemplateError::io(path, e))?;
        Self::from_yaml_str(&content).map_err(|e| TemplateError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}
