//! The fixed catalog of generated files.
//!
//! A [`TemplateSet`] is an ordered list of [`TemplateEntry`] values. Each entry
//! pairs a relative output path (derived from the metadata) with a pure
//! content function. Neither touches the filesystem or the clock, so a set
//! rendered twice against the same [`RenderContext`] yields identical bytes.

use std::fmt;
use std::path::PathBuf;

use crate::content::{gradle, java, resources};
use crate::error::TemplateResult;
use crate::manifest::{icon_path, mixin_config_name, ENTRYPOINT_CLASS};
use crate::metadata::CanonicalMetadata;
use crate::versions::LockedVersions;

/// Everything a template entry may read.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub metadata: &'a CanonicalMetadata,
    pub versions: &'a LockedVersions,
}

impl<'a> RenderContext<'a> {
    pub fn new(metadata: &'a CanonicalMetadata, versions: &'a LockedVersions) -> Self {
        Self { metadata, versions }
    }
}

/// Content produced by an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Binary(Vec<u8>),
}

impl FileContent {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Binary(bytes) => bytes,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

/// Logical group an entry is written in; progress is reported per phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    Build,
    Resources,
    Sources,
    Assets,
}

impl Phase {
    pub fn description(self) -> &'static str {
        match self {
            Phase::Build => "Writing build files",
            Phase::Resources => "Writing resources",
            Phase::Sources => "Writing sources",
            Phase::Assets => "Writing assets",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

type PathFn = fn(&CanonicalMetadata) -> PathBuf;
type ContentFn = fn(&RenderContext<'_>) -> TemplateResult<FileContent>;

/// One generated file.
#[derive(Clone, Copy)]
pub struct TemplateEntry {
    name: &'static str,
    phase: Phase,
    path: PathFn,
    content: ContentFn,
}

impl TemplateEntry {
    pub fn new(name: &'static str, phase: Phase, path: PathFn, content: ContentFn) -> Self {
        Self {
            name,
            phase,
            path,
            content,
        }
    }

    /// Stable identifier of the entry, independent of metadata.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Output path relative to the project root.
    pub fn path(&self, metadata: &CanonicalMetadata) -> PathBuf {
        (self.path)(metadata)
    }

    /// Produce the raw content; text is normalized by the renderer.
    pub fn content(&self, ctx: &RenderContext<'_>) -> TemplateResult<FileContent> {
        (self.content)(ctx)
    }
}

impl fmt::Debug for TemplateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateEntry")
            .field("name", &self.name)
            .field("phase", &self.phase)
            .finish()
    }
}

/// Ordered, fixed set of template entries.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    entries: Vec<TemplateEntry>,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::fabric_client()
    }
}

impl TemplateSet {
    /// Build a set from explicit entries.
    pub fn from_entries(entries: Vec<TemplateEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Relative output paths in catalog order.
    pub fn paths(&self, metadata: &CanonicalMetadata) -> Vec<PathBuf> {
        self.entries.iter().map(|e| e.path(metadata)).collect()
    }

    /// The Fabric client mod project.
    pub fn fabric_client() -> Self {
        Self::from_entries(vec![
            TemplateEntry::new("settings.gradle", Phase::Build, |_| PathBuf::from("settings.gradle"), |ctx| {
                Ok(text(gradle::Settings::from_context(ctx).render()))
            }),
            TemplateEntry::new(
                "gradle.properties",
                Phase::Build,
                |_| PathBuf::from("gradle.properties"),
                |ctx| Ok(text(gradle::Properties::from_context(ctx).render())),
            ),
            TemplateEntry::new("build.gradle", Phase::Build, |_| PathBuf::from("build.gradle"), |ctx| {
                Ok(text(gradle::BuildScript::from_context(ctx).render()))
            }),
            TemplateEntry::new(
                "gradle-wrapper.properties",
                Phase::Build,
                |_| PathBuf::from("gradle/wrapper/gradle-wrapper.properties"),
                |ctx| Ok(text(gradle::WrapperProperties::from_context(ctx).render())),
            ),
            TemplateEntry::new(".gitignore", Phase::Build, |_| PathBuf::from(".gitignore"), |_| {
                Ok(text(gradle::gitignore()))
            }),
            TemplateEntry::new("README.md", Phase::Build, |_| PathBuf::from("README.md"), |ctx| {
                Ok(text(gradle::Readme::from_context(ctx).render()))
            }),
            TemplateEntry::new(
                "fabric.mod.json",
                Phase::Resources,
                |_| resources_dir().join("fabric.mod.json"),
                |ctx| resources::mod_manifest(ctx).map(text),
            ),
            TemplateEntry::new(
                "mixins.json",
                Phase::Resources,
                |meta| resources_dir().join(mixin_config_name(meta.module_id())),
                |ctx| resources::mixin_config(ctx).map(text),
            ),
            TemplateEntry::new(
                "lang/en_us.json",
                Phase::Resources,
                |meta| assets_dir(meta).join("lang").join("en_us.json"),
                |ctx| resources::Lang::from_context(ctx).render().map(text),
            ),
            TemplateEntry::new(
                "entrypoint",
                Phase::Sources,
                |meta| source_dir(meta).join(format!("{}.java", ENTRYPOINT_CLASS)),
                |ctx| Ok(text(java::EntryPoint::from_context(ctx).render())),
            ),
            TemplateEntry::new(
                "module/Module.java",
                Phase::Sources,
                |meta| source_dir(meta).join("module").join("Module.java"),
                |ctx| Ok(text(java::PackageSource::from_context(ctx).module())),
            ),
            TemplateEntry::new(
                "module/ModuleManager.java",
                Phase::Sources,
                |meta| source_dir(meta).join("module").join("ModuleManager.java"),
                |ctx| Ok(text(java::PackageSource::from_context(ctx).module_manager())),
            ),
            TemplateEntry::new(
                "module/ExampleModule.java",
                Phase::Sources,
                |meta| source_dir(meta).join("module").join("ExampleModule.java"),
                |ctx| Ok(text(java::PackageSource::from_context(ctx).example_module())),
            ),
            TemplateEntry::new(
                "gui/ClientScreen.java",
                Phase::Sources,
                |meta| source_dir(meta).join("gui").join("ClientScreen.java"),
                |ctx| Ok(text(java::PackageSource::from_context(ctx).client_screen())),
            ),
            TemplateEntry::new(
                "mixin/MinecraftClientMixin.java",
                Phase::Sources,
                |meta| source_dir(meta).join("mixin").join("MinecraftClientMixin.java"),
                |ctx| Ok(text(java::ClientMixin::from_context(ctx).render())),
            ),
            TemplateEntry::new(
                "icon.png",
                Phase::Assets,
                |meta| resources_dir().join(icon_path(meta.module_id())),
                |_| resources::icon().map(FileContent::Binary),
            ),
        ])
    }
}

fn text(content: String) -> FileContent {
    FileContent::Text(content)
}

fn resources_dir() -> PathBuf {
    PathBuf::from("src").join("main").join("resources")
}

fn assets_dir(meta: &CanonicalMetadata) -> PathBuf {
    resources_dir().join("assets").join(meta.module_id())
}

/// `src/main/java/<derived namespace as directories>`
pub fn source_dir(meta: &CanonicalMetadata) -> PathBuf {
    let mut dir = PathBuf::from("src").join("main").join("java");
    dir.extend(meta.derived_namespace().split('.'));
    dir
}
