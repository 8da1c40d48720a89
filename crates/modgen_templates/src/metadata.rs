//! Project metadata: raw user input and its canonical, normalized form.
//!
//! [`RawMetadata`] is whatever the front-end collected. [`RawMetadata::normalize`]
//! is the only way to obtain a [`CanonicalMetadata`], and it never fails: every
//! field either normalizes to something valid or falls back to the default in
//! the [`MetadataField::fallback`] table.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TemplateError, TemplateResult};

use crate::normalize::{
    normalize_namespace, sanitize_folder_name, try_normalize_namespace, try_normalize_slug,
    NAMESPACE_FALLBACK, NAMESPACE_PATTERN, SLUG_FALLBACK, SLUG_MAX_LEN, SLUG_PATTERN,
};

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SLUG_PATTERN).expect("slug pattern is a valid regex"));
static NAMESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAMESPACE_PATTERN).expect("namespace pattern is a valid regex"));
static SEPARATOR_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_-]{2,}").expect("separator pattern is a valid regex"));

/// Suffix of the generated description when none is given.
const DESCRIPTION_TAGLINE: &str = "Fabric client mod";

/// User-entered project metadata. No invariant holds on any field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMetadata {
    /// Directory the project folder is created in
    pub output_dir: PathBuf,
    /// Name of the project folder
    pub project_folder_name: String,
    /// Human-readable mod name
    pub display_name: String,
    /// Mod identifier
    pub module_id: String,
    /// Package/group namespace (e.g. "com.example")
    pub namespace: String,
    /// Mod version
    pub version: String,
    /// Ordered author names
    pub authors: Vec<String>,
    /// Free-text description
    pub description: String,
    /// License name
    pub license: String,
}

impl RawMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn project_folder_name(mut self, name: impl Into<String>) -> Self {
        self.project_folder_name = name.into();
        self
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn module_id(mut self, id: impl Into<String>) -> Self {
        self.module_id = id.into();
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    /// Load metadata from a YAML file such as `modgen.yaml`.
    ///
    /// Absent keys stay empty and are defaulted by normalization.
    pub fn from_yaml_file(path: &Path) -> TemplateResult<Self> {
        debug!("Loading project metadata from {:?}", path);
        let content = fs::read_to_string(path).map_err(|e| TemplateError::io(path, e))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).map_err(|e| TemplateError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Split a comma-separated author string into an ordered list.
    ///
    /// Entries are kept verbatim; blank ones are dropped later by normalization.
    pub fn authors_from_list(list: &str) -> Vec<String> {
        list.split(',').map(str::to_string).collect()
    }

    /// Produce the canonical record.
    pub fn normalize(&self) -> CanonicalMetadata {
        self.normalize_with_notices().0
    }

    /// Produce the canonical record together with a notice for every field
    /// that fell back to a default or was rewritten.
    pub fn normalize_with_notices(&self) -> (CanonicalMetadata, Vec<NormalizationNotice>) {
        let mut notices = Vec::new();

        let project_folder_name = match sanitize_folder_name(&self.project_folder_name) {
            Some(name) => {
                note_rewrite(
                    &mut notices,
                    MetadataField::ProjectFolderName,
                    &self.project_folder_name,
                    &name,
                );
                name
            }
            None => fall_back(&mut notices, MetadataField::ProjectFolderName),
        };

        let display_name = non_blank(&self.display_name)
            .unwrap_or_else(|| fall_back(&mut notices, MetadataField::DisplayName));

        let module_id = normalize_identifier(
            &mut notices,
            MetadataField::ModuleId,
            &self.module_id,
            try_normalize_slug,
        );
        let namespace = normalize_identifier(
            &mut notices,
            MetadataField::Namespace,
            &self.namespace,
            try_normalize_namespace,
        );
        let derived_namespace = normalize_namespace(&format!("{namespace}.{module_id}"));

        let version = non_blank(&self.version)
            .unwrap_or_else(|| fall_back(&mut notices, MetadataField::Version));
        let license = non_blank(&self.license)
            .unwrap_or_else(|| fall_back(&mut notices, MetadataField::License));

        let mut authors: Vec<String> = self.authors.iter().filter_map(|a| non_blank(a)).collect();
        if authors.is_empty() {
            authors.push(fall_back(&mut notices, MetadataField::Authors));
        }

        let description = match non_blank(&self.description) {
            Some(description) => description,
            None => {
                let description = default_description(&display_name);
                notices.push(NormalizationNotice::Fallback {
                    field: MetadataField::Description,
                    value: description.clone(),
                });
                description
            }
        };

        let metadata = CanonicalMetadata {
            output_dir: self.output_dir.clone(),
            project_folder_name,
            display_name,
            module_id,
            namespace,
            derived_namespace,
            version,
            authors,
            description,
            license,
        };

        (metadata, notices)
    }
}

/// Fields of the metadata record that have a fallback default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataField {
    ProjectFolderName,
    DisplayName,
    ModuleId,
    Namespace,
    Version,
    Authors,
    Description,
    License,
}

impl MetadataField {
    /// The fallback used when the field normalizes to nothing.
    ///
    /// For [`MetadataField::Description`] this is the tagline appended to the
    /// display name; see [`default_description`].
    pub fn fallback(self) -> &'static str {
        match self {
            Self::ProjectFolderName => "CBClient",
            Self::DisplayName => "CBClient",
            Self::ModuleId => SLUG_FALLBACK,
            Self::Namespace => NAMESPACE_FALLBACK,
            Self::Version => "0.1.0",
            Self::Authors => "Unknown",
            Self::Description => DESCRIPTION_TAGLINE,
            Self::License => "MIT",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ProjectFolderName => "project folder name",
            Self::DisplayName => "display name",
            Self::ModuleId => "mod id",
            Self::Namespace => "namespace",
            Self::Version => "version",
            Self::Authors => "authors",
            Self::Description => "description",
            Self::License => "license",
        }
    }
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Description used when the user leaves it blank.
pub fn default_description(display_name: &str) -> String {
    format!("{} - {}", display_name, DESCRIPTION_TAGLINE)
}

/// Something normalization did silently that an operator may want to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizationNotice {
    /// The field was blank or unusable and took its default.
    Fallback { field: MetadataField, value: String },
    /// The field was usable but had to be rewritten.
    Rewritten {
        field: MetadataField,
        from: String,
        to: String,
    },
}

impl NormalizationNotice {
    pub fn field(&self) -> MetadataField {
        match self {
            Self::Fallback { field, .. } | Self::Rewritten { field, .. } => *field,
        }
    }
}

impl fmt::Display for NormalizationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fallback { field, value } => write!(f, "Using default {}: {}", field, value),
            Self::Rewritten { field, from, to } => {
                write!(f, "Adjusted {}: '{}' -> '{}'", field, from, to)
            }
        }
    }
}

/// Canonical project metadata.
///
/// Only [`RawMetadata::normalize`] constructs this type, so every value in
/// circulation satisfies the identifier invariants. Fields are read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalMetadata {
    output_dir: PathBuf,
    project_folder_name: String,
    display_name: String,
    module_id: String,
    namespace: String,
    derived_namespace: String,
    version: String,
    authors: Vec<String>,
    description: String,
    license: String,
}

impl CanonicalMetadata {
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn project_folder_name(&self) -> &str {
        &self.project_folder_name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn module_id(&self) -> &str {
        &self.module_id
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// `namespace.module_id`, renormalized; the package of generated sources.
    pub fn derived_namespace(&self) -> &str {
        &self.derived_namespace
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    /// List every broken invariant. Empty for any record built by `normalize`.
    pub fn invariant_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        if !SLUG_RE.is_match(&self.module_id) || self.module_id.len() > SLUG_MAX_LEN {
            violations.push(format!("mod id '{}' is not a valid slug", self.module_id));
        }
        if SEPARATOR_RUN_RE.is_match(&self.module_id) {
            violations.push(format!("mod id '{}' has a separator run", self.module_id));
        }
        if self.module_id.ends_with(['_', '-']) {
            violations.push(format!("mod id '{}' ends with a separator", self.module_id));
        }

        for (label, value) in [
            ("namespace", &self.namespace),
            ("derived namespace", &self.derived_namespace),
        ] {
            if !NAMESPACE_RE.is_match(value) {
                violations.push(format!("{} '{}' is not a valid namespace", label, value));
            }
        }

        for (field, value) in [
            (MetadataField::ProjectFolderName, &self.project_folder_name),
            (MetadataField::DisplayName, &self.display_name),
            (MetadataField::Version, &self.version),
            (MetadataField::License, &self.license),
            (MetadataField::Description, &self.description),
        ] {
            if value.trim().is_empty() {
                violations.push(format!("{} is blank", field));
            }
        }

        if self.authors.is_empty() {
            violations.push("authors list is empty".to_string());
        }
        if self.authors.iter().any(|a| a.trim().is_empty() || a.trim() != a) {
            violations.push("authors contain a blank or untrimmed entry".to_string());
        }

        violations
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn fall_back(notices: &mut Vec<NormalizationNotice>, field: MetadataField) -> String {
    let value = field.fallback().to_string();
    notices.push(NormalizationNotice::Fallback {
        field,
        value: value.clone(),
    });
    value
}

fn note_rewrite(notices: &mut Vec<NormalizationNotice>, field: MetadataField, raw: &str, to: &str) {
    let from = raw.trim();
    if from != to {
        notices.push(NormalizationNotice::Rewritten {
            field,
            from: from.to_string(),
            to: to.to_string(),
        });
    }
}

/// `normalize` returns `None` when the input has nothing usable.
fn normalize_identifier(
    notices: &mut Vec<NormalizationNotice>,
    field: MetadataField,
    raw: &str,
    normalize: fn(&str) -> Option<String>,
) -> String {
    match normalize(raw) {
        Some(normalized) => {
            note_rewrite(notices, field, raw, &normalized);
            normalized
        }
        None => fall_back(notices, field),
    }
}
