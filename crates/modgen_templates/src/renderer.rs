//! Template rendering.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::catalog::{FileContent, Phase, RenderContext, TemplateEntry, TemplateSet};
use crate::error::{TemplateError, TemplateResult};

/// A rendered file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Path relative to the project root
    pub path: PathBuf,
    pub phase: Phase,
    pub content: FileContent,
}

/// Renders template entries against a context.
#[derive(Debug, Clone, Copy)]
pub struct TemplateRenderer<'a> {
    ctx: RenderContext<'a>,
}

impl<'a> TemplateRenderer<'a> {
    pub fn new(ctx: RenderContext<'a>) -> Self {
        Self { ctx }
    }

    /// Render a single entry.
    pub fn render_entry(&self, entry: &TemplateEntry) -> TemplateResult<RenderedFile> {
        let path = entry.path(self.ctx.metadata);
        ensure_relative(&path)?;

        let content = match entry.content(&self.ctx)? {
            FileContent::Text(text) => FileContent::Text(normalize_text(&text)),
            binary => binary,
        };
        debug!("Rendered {} -> {:?}", entry.name(), path);

        Ok(RenderedFile {
            path,
            phase: entry.phase(),
            content,
        })
    }

    /// Render every entry of a set, in catalog order.
    pub fn render_all(&self, set: &TemplateSet) -> TemplateResult<Vec<RenderedFile>> {
        set.entries().iter().map(|e| self.render_entry(e)).collect()
    }
}

/// Strip trailing whitespace from every line, drop leading and trailing blank
/// lines, and end with exactly one newline.
pub fn normalize_text(content: &str) -> String {
    let lines: Vec<&str> = content.lines().map(str::trim_end).collect();
    let joined = lines.join("\n");
    let mut normalized = joined.trim_start_matches('\n').trim_end().to_string();
    normalized.push('\n');
    normalized
}

/// Reject paths that could land outside the project root.
fn ensure_relative(path: &Path) -> TemplateResult<()> {
    let contained = !path.as_os_str().is_empty()
        && path.components().all(|c| matches!(c, Component::Normal(_)));
    if contained {
        Ok(())
    } else {
        Err(TemplateError::render(
            path.display().to_string(),
            "output path must be relative and stay inside the project root",
        ))
    }
}
