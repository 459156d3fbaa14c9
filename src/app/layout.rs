//! Root Layout - One-Time Process Setup
//!
//! Registers the embedded fonts and records the page metadata before the
//! first window opens. Stored as a GPUI global and never mutated afterwards.

use gpui::{App, Global, SharedString};
use tracing::{info, warn};

use crate::assets::Assets;
use crate::error::{Error, Result};
use crate::states::GalleryPreferences;
use crate::theme::typography::{FALLBACK_FONT_FAMILY, PRIMARY_FONT_FAMILY};

/// Document-level metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PAGE_METADATA: PageMetadata = PageMetadata {
    title: "Avicure – AI Healthcare Platform",
    description: "Avicure mobile experience connecting patients, doctors, labs, and hospitals with cohesive AI-powered workflows.",
};

/// Process-wide shell configuration
#[derive(Debug, Clone)]
pub struct RootLayout {
    metadata: PageMetadata,
    font_family: SharedString,
    registered_fonts: usize,
}

impl Global for RootLayout {}

impl RootLayout {
    /// Resolve the shell configuration. A preference override wins; otherwise
    /// the primary family is used only when fonts were registered.
    pub fn new(
        metadata: PageMetadata,
        registered_fonts: usize,
        font_override: Option<&str>,
    ) -> Self {
        let font_family = match font_override {
            Some(family) => SharedString::from(family.to_string()),
            None if registered_fonts > 0 => SharedString::from(PRIMARY_FONT_FAMILY),
            None => SharedString::from(FALLBACK_FONT_FAMILY),
        };

        Self {
            metadata,
            font_family,
            registered_fonts,
        }
    }

    /// Register fonts and install the global. Later calls are no-ops.
    pub fn init(prefs: &GalleryPreferences, cx: &mut App) {
        if cx.has_global::<Self>() {
            return;
        }

        let registered_fonts = match Self::register_fonts(cx) {
            Ok(count) => count,
            Err(e) => {
                warn!(error = %e, "Failed to register embedded fonts, using platform font");
                0
            }
        };

        let layout = Self::new(PAGE_METADATA, registered_fonts, prefs.font_family());
        info!(
            font_family = %layout.font_family,
            registered_fonts,
            title = layout.metadata.title,
            "Root layout initialized"
        );
        cx.set_global(layout);
    }

    fn register_fonts(cx: &mut App) -> Result<usize> {
        let fonts = Assets::fonts();
        if fonts.is_empty() {
            warn!(family = PRIMARY_FONT_FAMILY, "No embedded fonts found");
            return Ok(0);
        }

        let count = fonts.len();
        cx.text_system().add_fonts(fonts).map_err(|e| Error::Font {
            message: e.to_string(),
        })?;
        Ok(count)
    }

    // ==================== Getters ====================

    pub fn metadata(&self) -> &PageMetadata {
        &self.metadata
    }

    pub fn title(&self) -> SharedString {
        SharedString::from(self.metadata.title)
    }

    pub fn font_family(&self) -> &SharedString {
        &self.font_family
    }

    pub fn registered_fonts(&self) -> usize {
        self.registered_fonts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_family_when_fonts_registered() {
        let layout = RootLayout::new(PAGE_METADATA, 4, None);
        assert_eq!(layout.font_family().to_string(), PRIMARY_FONT_FAMILY);
        assert_eq!(layout.registered_fonts(), 4);
    }

    #[test]
    fn fallback_family_without_fonts() {
        let layout = RootLayout::new(PAGE_METADATA, 0, None);
        assert_eq!(layout.font_family().to_string(), FALLBACK_FONT_FAMILY);
    }

    #[test]
    fn preference_override_wins() {
        let layout = RootLayout::new(PAGE_METADATA, 4, Some("Helvetica"));
        assert_eq!(layout.font_family().to_string(), "Helvetica");
    }

    #[test]
    fn metadata_is_the_page_metadata() {
        let layout = RootLayout::new(PAGE_METADATA, 0, None);
        assert_eq!(layout.title().to_string(), "Avicure – AI Healthcare Platform");
        assert!(layout.metadata().description.starts_with("Avicure mobile experience"));
    }
}
