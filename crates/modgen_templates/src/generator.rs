//! The generation pipeline: normalize, resolve target, write.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::catalog::{RenderContext, TemplateSet};
use crate::error::TemplateResult;
use crate::metadata::{CanonicalMetadata, NormalizationNotice, RawMetadata};
use crate::progress::{NoProgress, ProgressSink};
use crate::resolver::{CollisionResolver, DirectoryInspector, FsInspector, GenerationTarget};
use crate::versions::LockedVersions;
use crate::writer::TreeWriter;

/// What a generation would do, computed without writing anything.
#[derive(Debug, Clone)]
pub struct Preview {
    pub metadata: CanonicalMetadata,
    pub notices: Vec<NormalizationNotice>,
    pub target: GenerationTarget,
    /// Paths relative to the target root, in write order.
    pub files: Vec<PathBuf>,
}

/// Result of a completed generation run.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub target: GenerationTarget,
    pub metadata: CanonicalMetadata,
    /// Absolute paths of every written file.
    pub files: Vec<PathBuf>,
}

impl GenerationOutcome {
    pub fn root(&self) -> &Path {
        self.target.root()
    }
}

/// Generates projects from raw metadata.
pub struct Generator<I = FsInspector> {
    versions: LockedVersions,
    templates: TemplateSet,
    resolver: CollisionResolver<I>,
}

impl Generator<FsInspector> {
    pub fn new(versions: LockedVersions) -> Self {
        Self::with_resolver(versions, CollisionResolver::new())
    }
}

impl<I: DirectoryInspector> Generator<I> {
    pub fn with_resolver(versions: LockedVersions, resolver: CollisionResolver<I>) -> Self {
        Self {
            versions,
            templates: TemplateSet::fabric_client(),
            resolver,
        }
    }

    pub fn versions(&self) -> &LockedVersions {
        &self.versions
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Normalize and resolve, but do not write.
    pub fn preview(&self, raw: &RawMetadata) -> TemplateResult<Preview> {
        let (metadata, notices) = raw.normalize_with_notices();
        let target = self
            .resolver
            .resolve(metadata.output_dir(), metadata.project_folder_name())?;
        let files = self.templates.paths(&metadata);

        Ok(Preview {
            metadata,
            notices,
            target,
            files,
        })
    }

    /// Run a full generation, reporting progress to `sink`.
    pub fn generate(
        &self,
        raw: &RawMetadata,
        sink: &mut dyn ProgressSink,
    ) -> TemplateResult<GenerationOutcome> {
        let (metadata, notices) = raw.normalize_with_notices();
        let target = self
            .resolver
            .resolve(metadata.output_dir(), metadata.project_folder_name())?;

        info!("Generating {} into {:?}", metadata.module_id(), target.root());
        sink.line(&format!("Generating: {}", target.root().display()));
        for notice in &notices {
            sink.line(&notice.to_string());
        }

        let writer = TreeWriter::new(target);
        let files = writer.write(
            &self.templates,
            RenderContext::new(&metadata, &self.versions),
            sink,
        )?;
        sink.line("Done.");

        Ok(GenerationOutcome {
            target: writer.into_target(),
            metadata,
            files,
        })
    }

    /// Run a full generation without progress output.
    pub fn generate_quiet(&self, raw: &RawMetadata) -> TemplateResult<GenerationOutcome> {
        self.generate(raw, &mut NoProgress)
    }
}
