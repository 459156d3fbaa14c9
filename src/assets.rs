//! Embedded assets for Avicure Gallery
//!
//! Uses rust-embed to bundle fonts at compile time. Lookups that miss fall
//! through to the gpui-component asset bundle.

use gpui::{AssetSource, Result, SharedString};
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "fonts/*.ttf"]
pub struct Assets;

impl Assets {
    /// Every embedded font file, sorted by path so registration order is stable
    pub fn fonts() -> Vec<Cow<'static, [u8]>> {
        let mut paths: Vec<_> = Self::iter().filter(|p| is_font_path(p)).collect();
        paths.sort();

        paths
            .into_iter()
            .filter_map(|p| Self::get(&p).map(|f| f.data))
            .collect()
    }
}

fn is_font_path(path: &str) -> bool {
    path.starts_with("fonts/") && path.ends_with(".ttf")
}

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try our own assets first
        if let Some(f) = Self::get(path) {
            return Ok(Some(f.data));
        }
        // Then the component bundle
        ComponentAssets::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            ComponentAssets::iter()
                .filter_map(|p| p.starts_with(path).then(|| p.into()))
                .collect::<Vec<_>>(),
        );

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_ttf_files_under_fonts_count_as_fonts() {
        assert!(is_font_path("fonts/Inter-Regular.ttf"));
        assert!(!is_font_path("fonts/README.md"));
        assert!(!is_font_path("icons/Inter.ttf"));
    }

    #[test]
    fn empty_path_loads_nothing() {
        assert!(matches!(Assets.load(""), Ok(None)));
    }

    #[test]
    fn unknown_path_is_an_error() {
        assert!(Assets.load("fonts/does-not-exist.ttf").is_err());
    }
}
