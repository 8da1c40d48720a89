//! Structured descriptors written into the generated project.
//!
//! These mirror the JSON documents Fabric reads at load time. They are built
//! from [`CanonicalMetadata`] and [`LockedVersions`] and serialized with
//! `serde_json`, so key order follows field order.

use serde::{Deserialize, Serialize};

use crate::metadata::CanonicalMetadata;
use crate::versions::LockedVersions;

/// Placeholder resolved by the Gradle `processResources` task, not by us.
pub const VERSION_TOKEN: &str = "${version}";

/// Simple name of the generated client entry-point class.
pub const ENTRYPOINT_CLASS: &str = "CBClient";

/// Mixin class registered in the generated mixin config.
pub const CLIENT_MIXIN_CLASS: &str = "MinecraftClientMixin";

/// Side of the game the mod loads on. Generated mods are client-only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Client,
}

/// Entry points keyed by environment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Entrypoints {
    pub client: Vec<String>,
}

/// Version constraints on the mod's runtime dependencies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dependencies {
    pub fabricloader: String,
    pub minecraft: String,
    pub java: String,
    #[serde(rename = "fabric-api")]
    pub fabric_api: String,
}

impl Dependencies {
    pub fn from_versions(versions: &LockedVersions) -> Self {
        Self {
            fabricloader: format!(">={}", versions.min_loader_version),
            minecraft: format!("={}", versions.minecraft_version),
            java: format!(">={}", versions.java_version),
            fabric_api: "*".to_string(),
        }
    }
}

/// The `fabric.mod.json` manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModManifest {
    pub schema_version: u32,
    pub id: String,
    pub version: String,
    pub name: String,
    pub description: String,
    pub authors: Vec<String>,
    pub license: String,
    pub icon: String,
    pub environment: Environment,
    pub entrypoints: Entrypoints,
    pub mixins: Vec<String>,
    pub depends: Dependencies,
}

impl ModManifest {
    /// Manifest for a client-side mod.
    pub fn client(meta: &CanonicalMetadata, versions: &LockedVersions) -> Self {
        Self {
            schema_version: 1,
            id: meta.module_id().to_string(),
            version: VERSION_TOKEN.to_string(),
            name: meta.display_name().to_string(),
            description: meta.description().to_string(),
            authors: meta.authors().to_vec(),
            license: meta.license().to_string(),
            icon: icon_path(meta.module_id()),
            environment: Environment::Client,
            entrypoints: Entrypoints {
                client: vec![entrypoint_reference(meta.derived_namespace())],
            },
            mixins: vec![mixin_config_name(meta.module_id())],
            depends: Dependencies::from_versions(versions),
        }
    }
}

/// Injector defaults of a mixin config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Injectors {
    pub default_require: u32,
}

/// The `<mod_id>.mixins.json` config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MixinConfig {
    pub required: bool,
    pub min_version: String,
    pub package: String,
    pub compatibility_level: String,
    pub client: Vec<String>,
    pub injectors: Injectors,
}

impl MixinConfig {
    pub fn client(meta: &CanonicalMetadata, versions: &LockedVersions) -> Self {
        Self {
            required: true,
            min_version: "0.8".to_string(),
            package: format!("{}.mixin", meta.derived_namespace()),
            compatibility_level: format!("JAVA_{}", versions.java_version),
            client: vec![CLIENT_MIXIN_CLASS.to_string()],
            injectors: Injectors { default_require: 1 },
        }
    }
}

/// Fully-qualified name of the client entry-point class.
pub fn entrypoint_reference(derived_namespace: &str) -> String {
    format!("{}.{}", derived_namespace, ENTRYPOINT_CLASS)
}

/// Icon path relative to the resources root.
pub fn icon_path(module_id: &str) -> String {
    format!("assets/{}/icon.png", module_id)
}

pub fn mixin_config_name(module_id: &str) -> String {
    format!("{}.mixins.json", module_id)
}
