//! Filesystem locations for the persisted state slices.

use std::fs;
use std::path::PathBuf;

use mindwell_core::{MindwellError, Result};

/// Resolves the on-disk layout:
///
/// ```text
/// ~/.mindwell/
/// ├── config.json
/// ├── transcript.json
/// └── history.json
/// ```
pub struct MindwellPaths;

impl MindwellPaths {
    /// The base directory (`~/.mindwell`), without creating it.
    pub fn base_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MindwellError::Io("could not determine home directory".to_string()))?;
        Ok(home.join(".mindwell"))
    }

    /// The base directory, created if missing.
    pub fn ensure_base_dir() -> Result<PathBuf> {
        let dir = Self::base_dir()?;
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::ensure_base_dir()?.join("config.json"))
    }

    pub fn transcript_file() -> Result<PathBuf> {
        Ok(Self::ensure_base_dir()?.join("transcript.json"))
    }

    pub fn history_file() -> Result<PathBuf> {
        Ok(Self::ensure_base_dir()?.join("history.json"))
    }
}
