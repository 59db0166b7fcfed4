//! Data directory resolution
//!
//! Everything Outlay persists lives under one base directory: the keyed
//! record files in `data/` and the settings file beside them.
//!
//! Resolution order: the `OUTLAY_DATA_DIR` environment variable when set,
//! otherwise `$XDG_CONFIG_HOME/outlay` (falling back to `~/.config/outlay`)
//! on Unix, `%APPDATA%\outlay` on Windows.

use std::path::{Path, PathBuf};

use crate::error::LedgerError;

/// The directories and files Outlay reads and writes
#[derive(Debug, Clone)]
pub struct OutlayPaths {
    base_dir: PathBuf,
}

impl OutlayPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Fails when no override is set and the platform directory cannot be
    /// determined (no HOME on Unix, no APPDATA on Windows).
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = match std::env::var("OUTLAY_DATA_DIR") {
            Ok(custom) => PathBuf::from(custom),
            Err(_) => resolve_default_path()?,
        };
        Ok(Self { base_dir })
    }

    /// Use an explicit base directory (tests point this at a TempDir)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// The base directory holding everything Outlay persists
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// The directory the record store keeps its keyed files in
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// The settings file, beside the data directory
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Create the base and data directories if they do not exist
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        for dir in [self.base_dir.clone(), self.data_dir()] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                LedgerError::Persistence(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("outlay"));
    }
    let home = std::env::var("HOME")
        .map_err(|_| LedgerError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home).join(".config").join("outlay"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| LedgerError::Config("APPDATA environment variable not set".into()))?;
    Ok(PathBuf::from(appdata).join("outlay"))
}
