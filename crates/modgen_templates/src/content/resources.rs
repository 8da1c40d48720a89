//! Files under `src/main/resources`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{Map, Value};

use crate::catalog::RenderContext;
use crate::error::{TemplateError, TemplateResult};
use crate::manifest::{MixinConfig, ModManifest};

/// 16x16 placeholder icon.
const ICON_PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAABAAAAAQCAQAAAC1+jfqAAAAJElEQVR4AWP8z8Dwn4GBgYGJgYGBoYHhP0YGBgYGAEo5A6oE9g8pAAAAAElFTkSuQmCC";

/// `fabric.mod.json`
pub fn mod_manifest(ctx: &RenderContext<'_>) -> TemplateResult<String> {
    let manifest = ModManifest::client(ctx.metadata, ctx.versions);
    Ok(serde_json::to_string_pretty(&manifest)?)
}

/// `<mod_id>.mixins.json`
pub fn mixin_config(ctx: &RenderContext<'_>) -> TemplateResult<String> {
    let config = MixinConfig::client(ctx.metadata, ctx.versions);
    Ok(serde_json::to_string_pretty(&config)?)
}

/// `assets/<mod_id>/lang/en_us.json`
pub struct Lang<'a> {
    pub module_id: &'a str,
    pub display_name: &'a str,
}

impl<'a> Lang<'a> {
    pub fn from_context(ctx: &RenderContext<'a>) -> Self {
        Self {
            module_id: ctx.metadata.module_id(),
            display_name: ctx.metadata.display_name(),
        }
    }

    pub fn render(&self) -> TemplateResult<String> {
        let mut entries = Map::new();
        entries.insert(
            format!("key.{}.open_gui", self.module_id),
            Value::String(format!("Open {} GUI", self.display_name)),
        );
        entries.insert(
            format!("category.{}", self.module_id),
            Value::String(self.display_name.to_string()),
        );
        Ok(serde_json::to_string_pretty(&Value::Object(entries))?)
    }
}

/// `assets/<mod_id>/icon.png`
pub fn icon() -> TemplateResult<Vec<u8>> {
    STANDARD
        .decode(ICON_PNG_BASE64)
        .map_err(|e| TemplateError::render("icon.png", e))
}
