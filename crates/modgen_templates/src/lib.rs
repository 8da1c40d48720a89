//! # modgen_templates
//!
//! Metadata normalization and project tree generation for modgen.
//!
//! A generation run is a three-stage pipeline:
//!
//! 1. **Normalize**: [`RawMetadata::normalize`] turns arbitrary user input into
//!    a [`CanonicalMetadata`] whose identifiers are valid slugs and namespaces.
//!    It never fails; unusable fields take documented defaults.
//! 2. **Resolve**: [`CollisionResolver`] picks the destination directory,
//!    moving to a timestamp-suffixed sibling when the project folder is
//!    already populated.
//! 3. **Write**: [`TreeWriter`] renders the fixed [`TemplateSet`] and writes
//!    every file beneath the target.
//!
//! [`Generator`] runs all three.
//!
//! ## Example
//!
//! ```rust,no_run
//! use modgen_templates::{Generator, LockedVersions, RawMetadata};
//!
//! let raw = RawMetadata::new()
//!     .output_dir("./out")
//!     .display_name("Nova")
//!     .module_id("Nova Client")
//!     .namespace("dev.ann")
//!     .authors(["Ann"]);
//!
//! let generator = Generator::new(LockedVersions::default());
//! let mut progress = |line: &str| println!("{line}");
//! let outcome = generator.generate(&raw, &mut progress).unwrap();
//! println!("Generated at {}", outcome.root().display());
//! ```

pub mod catalog;
pub mod content;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod metadata;
pub mod normalize;
pub mod progress;
pub mod renderer;
pub mod resolver;
pub mod versions;
pub mod writer;

pub use catalog::{FileContent, Phase, RenderContext, TemplateEntry, TemplateSet};
pub use error::{TemplateError, TemplateResult};
pub use generator::{GenerationOutcome, Generator, Preview};
pub use manifest::{MixinConfig, ModManifest, ENTRYPOINT_CLASS, VERSION_TOKEN};
pub use metadata::{CanonicalMetadata, MetadataField, NormalizationNotice, RawMetadata};
pub use normalize::{
    normalize_namespace, normalize_slug, sanitize_folder_name, try_normalize_namespace,
    try_normalize_slug,
};
pub use progress::{NoProgress, ProgressSink};
pub use renderer::{RenderedFile, TemplateRenderer};
pub use resolver::{
    resolve_target, CollisionResolver, DirectoryInspector, FsInspector, GenerationTarget,
    PathState,
};
pub use versions::LockedVersions;
pub use writer::TreeWriter;
