//! Target directory resolution.
//!
//! Picks the directory a generation run writes into. An existing, non-empty
//! project folder is never written over: the run moves to a sibling folder
//! suffixed with a second-resolution timestamp instead. The suffixed candidate
//! is not checked again; two runs for the same folder within one second may
//! land in the same directory.
//!
//! Resolution inspects the filesystem but never creates anything.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::{debug, warn};

use crate::error::{TemplateError, TemplateResult};

/// Timestamp format appended to an occupied folder name.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// What currently occupies a candidate path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathState {
    /// Nothing exists at the path
    Missing,
    /// An empty directory
    EmptyDir,
    /// A non-empty directory, or anything that is not a directory
    Occupied,
}

impl PathState {
    pub fn is_free(self) -> bool {
        !matches!(self, PathState::Occupied)
    }
}

/// Read-only view of the filesystem used to judge candidate paths.
#[cfg_attr(test, mockall::automock)]
pub trait DirectoryInspector {
    fn inspect(&self, path: &Path) -> io::Result<PathState>;
}

/// [`DirectoryInspector`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsInspector;

impl DirectoryInspector for FsInspector {
    fn inspect(&self, path: &Path) -> io::Result<PathState> {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(PathState::Missing),
            Err(e) => return Err(e),
        };

        if !metadata.is_dir() {
            return Ok(PathState::Occupied);
        }

        let has_entries = fs::read_dir(path)?.next().is_some();
        Ok(if has_entries {
            PathState::Occupied
        } else {
            PathState::EmptyDir
        })
    }
}

/// The resolved, absolute destination root of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTarget {
    root: PathBuf,
    primary: PathBuf,
}

impl GenerationTarget {
    /// Directory the tree is written into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The first-choice candidate (`output_dir / project_folder_name`).
    pub fn primary(&self) -> &Path {
        &self.primary
    }

    /// Whether the primary candidate was occupied.
    pub fn is_suffixed(&self) -> bool {
        self.root != self.primary
    }

    pub fn into_path(self) -> PathBuf {
        self.root
    }
}

/// Chooses generation targets.
#[derive(Debug, Clone, Default)]
pub struct CollisionResolver<I = FsInspector> {
    inspector: I,
}

impl CollisionResolver<FsInspector> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: DirectoryInspector> CollisionResolver<I> {
    pub fn with_inspector(inspector: I) -> Self {
        Self { inspector }
    }

    /// Resolve using the current local time for a possible suffix.
    pub fn resolve(&self, output_dir: &Path, folder_name: &str) -> TemplateResult<GenerationTarget> {
        self.resolve_at(output_dir, folder_name, Local::now().naive_local())
    }

    /// Resolve with an explicit timestamp.
    pub fn resolve_at(
        &self,
        output_dir: &Path,
        folder_name: &str,
        now: NaiveDateTime,
    ) -> TemplateResult<GenerationTarget> {
        let base = absolute_dir(output_dir)?;
        let primary = base.join(folder_name);

        let state = self
            .inspector
            .inspect(&primary)
            .map_err(|e| TemplateError::io(&primary, e))?;
        debug!("Candidate {:?} is {:?}", primary, state);

        let root = if state.is_free() {
            primary.clone()
        } else {
            let suffixed = base.join(format!("{}_{}", folder_name, now.format(TIMESTAMP_FORMAT)));
            warn!(
                "{} already exists and is not empty, using {}",
                primary.display(),
                suffixed.display()
            );
            suffixed
        };

        Ok(GenerationTarget { root, primary })
    }
}

/// Resolve against the real filesystem and clock.
pub fn resolve_target(output_dir: &Path, folder_name: &str) -> TemplateResult<GenerationTarget> {
    CollisionResolver::new().resolve(output_dir, folder_name)
}

fn absolute_dir(dir: &Path) -> TemplateResult<PathBuf> {
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    std::path::absolute(dir).map_err(|e| TemplateError::io(dir, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(15, 9, 26)
            .unwrap()
    }

    #[test]
    fn test_missing_candidate_is_used() {
        let mut inspector = MockDirectoryInspector::new();
        inspector
            .expect_inspect()
            .withf(|path| path == Path::new("/work/Nova"))
            .times(1)
            .returning(|_| Ok(PathState::Missing));

        let resolver = CollisionResolver::with_inspector(inspector);
        let target = resolver.resolve_at(Path::new("/work"), "Nova", fixed_time()).unwrap();
        assert_eq!(target.root(), Path::new("/work/Nova"));
        assert!(!target.is_suffixed());
    }

    #[test]
    fn test_empty_dir_is_used() {
        let mut inspector = MockDirectoryInspector::new();
        inspector
            .expect_inspect()
            .returning(|_| Ok(PathState::EmptyDir));

        let resolver = CollisionResolver::with_inspector(inspector);
        let target = resolver.resolve_at(Path::new("/work"), "Nova", fixed_time()).unwrap();
        assert_eq!(target.root(), Path::new("/work/Nova"));
    }

    #[test]
    fn test_occupied_candidate_gets_timestamp_suffix() {
        let mut inspector = MockDirectoryInspector::new();
        inspector
            .expect_inspect()
            .times(1)
            .returning(|_| Ok(PathState::Occupied));

        let resolver = CollisionResolver::with_inspector(inspector);
        let target = resolver.resolve_at(Path::new("/work"), "Nova", fixed_time()).unwrap();
        assert_eq!(target.root(), Path::new("/work/Nova_20260314_150926"));
        assert_eq!(target.primary(), Path::new("/work/Nova"));
        assert!(target.is_suffixed());
    }

    #[test]
    fn test_inspection_error_carries_path() {
        let mut inspector = MockDirectoryInspector::new();
        inspector
            .expect_inspect()
            .returning(|_| Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")));

        let resolver = CollisionResolver::with_inspector(inspector);
        let err = resolver
            .resolve_at(Path::new("/work"), "Nova", fixed_time())
            .unwrap_err();
        assert!(err.to_string().contains("/work/Nova"));
    }

    #[test]
    fn test_fs_inspector_states() {
        let temp = tempdir().unwrap();
        let inspector = FsInspector;

        let missing = temp.path().join("missing");
        assert_eq!(inspector.inspect(&missing).unwrap(), PathState::Missing);

        let empty = temp.path().join("empty");
        fs::create_dir(&empty).unwrap();
        assert_eq!(inspector.inspect(&empty).unwrap(), PathState::EmptyDir);

        fs::write(empty.join("file.txt"), "x").unwrap();
        assert_eq!(inspector.inspect(&empty).unwrap(), PathState::Occupied);

        let file = temp.path().join("plain.txt");
        fs::write(&file, "x").unwrap();
        assert_eq!(inspector.inspect(&file).unwrap(), PathState::Occupied);
    }

    #[test]
    fn test_resolution_creates_nothing() {
        let temp = tempdir().unwrap();
        let target = resolve_target(temp.path(), "Nova").unwrap();
        assert_eq!(target.root(), temp.path().join("Nova"));
        assert!(!target.root().exists());
    }

    #[test]
    fn test_relative_output_dir_is_made_absolute() {
        let target = CollisionResolver::with_inspector(FsInspector)
            .resolve_at(Path::new("some/relative/dir"), "Nova", fixed_time())
            .unwrap();
        assert!(target.root().is_absolute());
        assert!(target.root().ends_with("some/relative/dir/Nova"));
    }
}
