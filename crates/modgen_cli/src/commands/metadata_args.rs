//! Project metadata flags shared by `generate` and `preview`.
//!
//! Values are merged field by field: a flag beats the `--config` file, and the
//! file beats the front-end defaults below. Only the folder name and mod id
//! have front-end defaults; every other blank field is left to the library's
//! fallback table so its notices reach the user.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use modgen_templates::{LockedVersions, RawMetadata};

pub const DEFAULT_FOLDER: &str = "CBClient_client";
pub const DEFAULT_MOD_ID: &str = "cbclient";

#[derive(Args, Debug, Default, Clone)]
pub struct MetadataArgs {
    /// Project metadata file (YAML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Locked versions file (YAML)
    #[arg(long, value_name = "FILE", env = "MODGEN_VERSIONS")]
    pub versions: Option<PathBuf>,

    /// Directory the project folder is created in (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Project folder name
    #[arg(long)]
    pub folder: Option<String>,

    /// Display name of the mod
    #[arg(short, long)]
    pub name: Option<String>,

    /// Mod id
    #[arg(long = "mod-id", value_name = "ID")]
    pub mod_id: Option<String>,

    /// Package namespace, e.g. com.example
    #[arg(short, long, value_name = "NS")]
    pub group: Option<String>,

    /// Mod version
    #[arg(long = "mod-version", value_name = "VERSION")]
    pub mod_version: Option<String>,

    /// Comma-separated author list
    #[arg(short, long, value_name = "CSV")]
    pub authors: Option<String>,

    /// Mod description
    #[arg(short, long)]
    pub description: Option<String>,

    /// License name
    #[arg(short, long)]
    pub license: Option<String>,
}

impl MetadataArgs {
    /// Build the raw metadata for this invocation.
    pub fn raw_metadata(&self) -> Result<RawMetadata> {
        let mut raw = match &self.config {
            Some(path) => RawMetadata::from_yaml_file(path)
                .with_context(|| format!("Failed to load project metadata from {:?}", path))?,
            None => RawMetadata::default(),
        };

        if let Some(dir) = &self.output {
            raw.output_dir = dir.clone();
        }
        override_with(&mut raw.project_folder_name, &self.folder);
        override_with(&mut raw.display_name, &self.name);
        override_with(&mut raw.module_id, &self.mod_id);
        override_with(&mut raw.namespace, &self.group);
        override_with(&mut raw.version, &self.mod_version);
        override_with(&mut raw.description, &self.description);
        override_with(&mut raw.license, &self.license);
        if let Some(list) = &self.authors {
            raw.authors = RawMetadata::authors_from_list(list);
        }

        apply_defaults(&mut raw);
        debug!("Merged project metadata: {:?}", raw);
        Ok(raw)
    }

    pub fn locked_versions(&self) -> Result<LockedVersions> {
        load_versions(self.versions.as_deref())
    }
}

/// Load the locked versions table, or the built-in one when no file is given.
pub fn load_versions(path: Option<&Path>) -> Result<LockedVersions> {
    match path {
        Some(path) => LockedVersions::from_yaml_file(path)
            .with_context(|| format!("Failed to load locked versions from {:?}", path)),
        None => Ok(LockedVersions::default()),
    }
}

fn override_with(field: &mut String, flag: &Option<String>) {
    if let Some(value) = flag {
        *field = value.clone();
    }
}

fn default_if_empty(field: &mut String, default: &str) {
    if field.is_empty() {
        *field = default.to_string();
    }
}

fn apply_defaults(raw: &mut RawMetadata) {
    if raw.output_dir.as_os_str().is_empty() {
        raw.output_dir = PathBuf::from(".");
    }
    default_if_empty(&mut raw.project_folder_name, DEFAULT_FOLDER);
    default_if_empty(&mut raw.module_id, DEFAULT_MOD_ID);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_file_or_flags() {
        let raw = MetadataArgs::default().raw_metadata().unwrap();

        assert_eq!(raw.output_dir, PathBuf::from("."));
        assert_eq!(raw.project_folder_name, DEFAULT_FOLDER);
        assert_eq!(raw.module_id, DEFAULT_MOD_ID);
        assert!(raw.display_name.is_empty());
        assert!(raw.description.is_empty());
        assert!(raw.authors.is_empty());
    }

    #[test]
    fn test_blank_description_uses_library_fallback() {
        let args = MetadataArgs {
            name: Some("Nova".to_string()),
            ..MetadataArgs::default()
        };
        let (meta, notices) = args.raw_metadata().unwrap().normalize_with_notices();

        assert_eq!(meta.description(), "Nova - Fabric client mod");
        assert_eq!(meta.authors(), ["Unknown".to_string()]);
        assert!(notices
            .iter()
            .any(|n| n.to_string() == "Using default description: Nova - Fabric client mod"));
        assert!(!notices.iter().any(|n| n.to_string().contains("mod id")));
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("modgen.yaml");
        fs::write(
            &config,
            "display_name: From File\nmodule_id: file_id\nlicense: Apache-2.0\n",
        )
        .unwrap();

        let args = MetadataArgs {
            config: Some(config),
            name: Some("From Flag".to_string()),
            authors: Some("Ann, Ben".to_string()),
            ..MetadataArgs::default()
        };
        let raw = args.raw_metadata().unwrap();

        assert_eq!(raw.display_name, "From Flag");
        assert_eq!(raw.module_id, "file_id");
        assert_eq!(raw.license, "Apache-2.0");
        assert_eq!(raw.authors, vec!["Ann", " Ben"]);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args = MetadataArgs {
            config: Some(PathBuf::from("/nonexistent/modgen.yaml")),
            ..MetadataArgs::default()
        };
        assert!(args.raw_metadata().is_err());
    }

    #[test]
    fn test_versions_default_and_file() {
        assert_eq!(load_versions(None).unwrap(), LockedVersions::default());

        let temp = tempdir().unwrap();
        let path = temp.path().join("versions.yaml");
        fs::write(&path, "minecraft_version: \"1.21.5\"\n").unwrap();
        let versions = load_versions(Some(&path)).unwrap();
        assert_eq!(versions.minecraft_version, "1.21.5");
        assert_eq!(versions.java_version, LockedVersions::default().java_version);
    }
}
