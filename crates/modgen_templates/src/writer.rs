//! Writes a rendered template set under a generation target.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::catalog::{Phase, RenderContext, TemplateSet};
use crate::error::{TemplateError, TemplateResult};
use crate::progress::ProgressSink;
use crate::renderer::{RenderedFile, TemplateRenderer};
use crate::resolver::GenerationTarget;

/// Writes files beneath one [`GenerationTarget`].
///
/// Every file lands at `target / relative path`; parent directories are
/// created as needed and existing files at the same path are overwritten.
/// The first I/O failure aborts the write and leaves already-written files in
/// place.
#[derive(Debug)]
pub struct TreeWriter {
    target: GenerationTarget,
}

impl TreeWriter {
    pub fn new(target: GenerationTarget) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &GenerationTarget {
        &self.target
    }

    /// Hand the target back once writing is finished.
    pub fn into_target(self) -> GenerationTarget {
        self.target
    }

    /// Render and write every entry of `set`, reporting each phase once.
    ///
    /// Returns the absolute paths written, in catalog order.
    pub fn write(
        &self,
        set: &TemplateSet,
        ctx: RenderContext<'_>,
        sink: &mut dyn ProgressSink,
    ) -> TemplateResult<Vec<PathBuf>> {
        let renderer = TemplateRenderer::new(ctx);
        let mut written = Vec::with_capacity(set.len());
        let mut current_phase: Option<Phase> = None;

        for entry in set.entries() {
            if current_phase != Some(entry.phase()) {
                current_phase = Some(entry.phase());
                info!("{}", entry.phase());
                sink.line(entry.phase().description());
            }

            let file = renderer.render_entry(entry)?;
            written.push(self.write_file(&file)?);
        }

        info!("Wrote {} files to {:?}", written.len(), self.target.root());
        Ok(written)
    }

    /// Write one rendered file, creating its parent directories.
    pub fn write_file(&self, file: &RenderedFile) -> TemplateResult<PathBuf> {
        let path = self.target.root().join(&file.path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| TemplateError::io(parent, e))?;
        }
        fs::write(&path, file.content.as_bytes()).map_err(|e| TemplateError::io(&path, e))?;

        debug!("Wrote {:?}", file.path);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FileContent;
    use crate::metadata::RawMetadata;
    use crate::progress::NoProgress;
    use crate::resolver::resolve_target;
    use crate::versions::LockedVersions;
    use tempfile::tempdir;

    #[test]
    fn test_write_reports_phases_not_files() {
        let temp = tempdir().unwrap();
        let meta = RawMetadata::new().output_dir(temp.path()).normalize();
        let versions = LockedVersions::default();
        let set = TemplateSet::fabric_client();
        let target = resolve_target(meta.output_dir(), meta.project_folder_name()).unwrap();

        let mut lines = Vec::new();
        let mut sink = |line: &str| lines.push(line.to_string());
        let writer = TreeWriter::new(target);
        let written = writer
            .write(&set, RenderContext::new(&meta, &versions), &mut sink)
            .unwrap();

        assert_eq!(written.len(), set.len());
        assert!(written.iter().all(|p| p.starts_with(writer.target().root())));
        assert_eq!(
            lines,
            vec![
                "Writing build files",
                "Writing resources",
                "Writing sources",
                "Writing assets"
            ]
        );
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = tempdir().unwrap();
        let target = resolve_target(temp.path(), "proj").unwrap();
        let writer = TreeWriter::new(target);

        let mut file = RenderedFile {
            path: PathBuf::from("nested/dir/a.txt"),
            phase: Phase::Build,
            content: FileContent::Text("first\n".to_string()),
        };
        let path = writer.write_file(&file).unwrap();
        file.content = FileContent::Text("second\n".to_string());
        writer.write_file(&file).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "second\n");
    }

    #[test]
    fn test_write_failure_is_io_error_with_path() {
        let temp = tempdir().unwrap();
        // A file where the project directory should be makes every write fail.
        let blocker = temp.path().join("proj");
        fs::write(&blocker, "not a directory").unwrap();

        let meta = RawMetadata::new().output_dir(temp.path()).normalize();
        let versions = LockedVersions::default();
        let target = crate::resolver::CollisionResolver::with_inspector(AlwaysFree)
            .resolve(temp.path(), "proj")
            .unwrap();

        let err = TreeWriter::new(target)
            .write(
                &TemplateSet::fabric_client(),
                RenderContext::new(&meta, &versions),
                &mut NoProgress,
            )
            .unwrap_err();
        assert!(err.is_io());
        assert!(err.to_string().contains("proj"));
    }

    struct AlwaysFree;

    impl crate::resolver::DirectoryInspector for AlwaysFree {
        fn inspect(&self, _path: &std::path::Path) -> std::io::Result<crate::resolver::PathState> {
            Ok(crate::resolver::PathState::Missing)
        }
    }
}
