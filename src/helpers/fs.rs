//! File System Utilities
//!
//! Configuration and data directory management.

use crate::constants::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME).ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/avicure-gallery/` or `$XDG_CONFIG_HOME/avicure-gallery/`
/// - **macOS**: `~/Library/Application Support/health.avicure.avicure-gallery/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\avicure\avicure-gallery\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    ensure_dir(dirs.config_dir())
}

/// Get or create the data directory used for log files
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/avicure-gallery/`
/// - **macOS**: `~/Library/Application Support/health.avicure.avicure-gallery/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\avicure\avicure-gallery\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    ensure_dir(dirs.data_dir())
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
