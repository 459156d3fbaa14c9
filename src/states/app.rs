//! Application State
//!
//! Gallery preferences persisted as TOML in the platform config directory.
//! Every key is optional; an empty or missing file means defaults.

use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MAX_GRID_COLUMNS, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH, THREE_COLUMN_MIN_WIDTH, TWO_COLUMN_MIN_WIDTH,
};
use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

const CONFIG_FILE_NAME: &str = "avicure-gallery.toml";

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Persisted gallery preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GalleryPreferences {
    /// Pinned grid column count (1..=3); follows the window width when unset
    columns: Option<usize>,
    window_width: Option<f32>,
    window_height: Option<f32>,
    /// Overrides the primary font family
    font_family: Option<String>,
}

impl GalleryPreferences {
    /// Load preferences from the config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading preferences file");
        let value = std::fs::read_to_string(&path)?;

        Self::parse(&value).inspect_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse preferences file");
        })
    }

    /// Parse and validate preferences from TOML text
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::new());
        }

        let prefs: Self = toml::from_str(value)?;
        prefs.validate()?;
        Ok(prefs)
    }

    /// Create new default preferences
    pub fn new() -> Self {
        Self::default()
    }

    fn validate(&self) -> Result<()> {
        if let Some(columns) = self.columns {
            if columns == 0 || columns > MAX_GRID_COLUMNS {
                return Err(Error::Invalid {
                    message: format!("columns must be between 1 and {MAX_GRID_COLUMNS}, got {columns}"),
                });
            }
        }

        for (key, value) in [("window_width", self.window_width), ("window_height", self.window_height)] {
            if let Some(value) = value {
                if !value.is_finite() || value <= 0.0 {
                    return Err(Error::Invalid {
                        message: format!("{key} must be a positive number of pixels, got {value}"),
                    });
                }
            }
        }

        if self.font_family.as_deref().is_some_and(|f| f.trim().is_empty()) {
            return Err(Error::Invalid {
                message: "font_family must not be empty".to_string(),
            });
        }

        Ok(())
    }

    // ==================== Getters ====================

    /// Initial window size, clamped to the minimum usable size
    pub fn window_size(&self) -> (f32, f32) {
        (
            self.window_width.unwrap_or(DEFAULT_WINDOW_WIDTH).max(MIN_WINDOW_WIDTH),
            self.window_height.unwrap_or(DEFAULT_WINDOW_HEIGHT).max(MIN_WINDOW_HEIGHT),
        )
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    /// Number of card columns for a viewport `width`
    pub fn grid_columns(&self, width: f32) -> usize {
        self.columns.unwrap_or_else(|| columns_for_width(width))
    }

    // ==================== Setters ====================

    pub fn set_window_size(&mut self, width: f32, height: f32) {
        self.window_width = Some(width);
        self.window_height = Some(height);
    }
}

/// Responsive column count: one column below 1280 px, two from 1280 px,
/// three from 1536 px
pub fn columns_for_width(width: f32) -> usize {
    if width >= THREE_COLUMN_MIN_WIDTH {
        3
    } else if width >= TWO_COLUMN_MIN_WIDTH {
        2
    } else {
        1
    }
}

// ==================== Persistence ====================

/// Preferences text with the window size replaced and every other key kept.
/// Text that does not parse is refused, so a broken file is never rewritten.
pub fn with_window_size(text: &str, width: f32, height: f32) -> Result<String> {
    let mut prefs = GalleryPreferences::parse(text)?;
    prefs.set_window_size(width, height);
    prefs.validate()?;
    Ok(toml::to_string(&prefs)?)
}

/// Store the window size in the preferences file
pub fn save_window_size(width: f32, height: f32) -> Result<()> {
    let path = get_config_path()?;
    let current = std::fs::read_to_string(&path)?;
    let updated = with_window_size(&current, width, height).inspect_err(|e| {
        error!(error = %e, path = ?path, "Preferences file left untouched");
    })?;
    std::fs::write(&path, updated)?;
    info!(path = ?path, width, height, "Window size saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_gives_defaults() {
        let prefs = GalleryPreferences::parse("  \n").expect("empty is valid");
        assert_eq!(prefs, GalleryPreferences::default());
        assert_eq!(prefs.window_size(), (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));
        assert_eq!(prefs.font_family(), None);
    }

    #[test]
    fn parses_all_keys() {
        let text = r#"
columns = 2
window_width = 1200.0
window_height = 800.0
font_family = "Helvetica"
"#;
        let prefs = GalleryPreferences::parse(text).expect("valid preferences");
        assert_eq!(prefs.grid_columns(2560.0), 2);
        assert_eq!(prefs.window_size(), (1200.0, 800.0));
        assert_eq!(prefs.font_family(), Some("Helvetica"));
    }

    #[test]
    fn rejects_out_of_range_columns() {
        for text in ["columns = 0", "columns = 4"] {
            let err = GalleryPreferences::parse(text).expect_err("columns out of range");
            assert!(matches!(err, Error::Invalid { .. }), "unexpected error: {err}");
        }
    }

    #[test]
    fn rejects_non_positive_window_size() {
        let err = GalleryPreferences::parse("window_width = -5.0").expect_err("negative width");
        assert!(matches!(err, Error::Invalid { .. }));
    }

    #[test]
    fn rejects_unknown_keys_and_bad_types() {
        assert!(matches!(
            GalleryPreferences::parse("theme = \"dark\""),
            Err(Error::TomlDe { .. })
        ));
        assert!(matches!(
            GalleryPreferences::parse("columns = \"two\""),
            Err(Error::TomlDe { .. })
        ));
    }

    #[test]
    fn window_size_is_clamped_to_minimum() {
        let mut prefs = GalleryPreferences::new();
        prefs.set_window_size(100.0, 100.0);
        assert_eq!(prefs.window_size(), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }

    #[test]
    fn columns_follow_breakpoints() {
        assert_eq!(columns_for_width(390.0), 1);
        assert_eq!(columns_for_width(1279.0), 1);
        assert_eq!(columns_for_width(1280.0), 2);
        assert_eq!(columns_for_width(1535.0), 2);
        assert_eq!(columns_for_width(1536.0), 3);
        assert_eq!(columns_for_width(2560.0), 3);
    }

    #[test]
    fn pinned_columns_override_width() {
        let prefs = GalleryPreferences::new();
        assert_eq!(prefs.grid_columns(1600.0), 3);

        let pinned = GalleryPreferences::parse("columns = 1").expect("valid preferences");
        assert_eq!(pinned.grid_columns(1600.0), 1);
        assert_eq!(pinned.grid_columns(400.0), 1);
    }

    #[test]
    fn round_trips_through_toml() {
        let text = "columns = 2\nwindow_width = 1400.0\nwindow_height = 900.0\nfont_family = \"Inter\"\n";
        let prefs = GalleryPreferences::parse(text).expect("parse");

        let written = toml::to_string(&prefs).expect("serialize");
        assert_eq!(GalleryPreferences::parse(&written).expect("reparse"), prefs);
    }

    #[test]
    fn window_size_update_keeps_other_keys() {
        let text = "columns = 2\nfont_family = \"Helvetica\"\n";
        let updated = with_window_size(text, 1400.0, 900.0).expect("valid preferences");

        let prefs = GalleryPreferences::parse(&updated).expect("parse");
        assert_eq!(prefs.grid_columns(2560.0), 2);
        assert_eq!(prefs.font_family(), Some("Helvetica"));
        assert_eq!(prefs.window_size(), (1400.0, 900.0));
    }

    #[test]
    fn window_size_update_refuses_broken_file() {
        let text = "columns = 2\nfont_family = \"Helvetica\"\ncolums = 3\n";
        assert!(matches!(
            with_window_size(text, 1400.0, 900.0),
            Err(Error::TomlDe { .. })
        ));
        assert!(matches!(
            with_window_size("columns = 7", 1400.0, 900.0),
            Err(Error::Invalid { .. })
        ));
    }

    #[test]
    fn window_size_update_on_empty_file() {
        let updated = with_window_size("", 1200.0, 800.0).expect("empty is valid");
        let prefs = GalleryPreferences::parse(&updated).expect("parse");
        assert_eq!(prefs.window_size(), (1200.0, 800.0));
        assert_eq!(prefs.font_family(), None);
    }
}
