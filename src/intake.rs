//! Intake: discovery of bundle archives in the mods directory
//!
//! Candidate (not yet installed) archives live in the mods directory root or
//! its `_uninstalled_` folder; archives of installed bundles are tracked in
//! `_installed_`. Both tracking folders are created on first use.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ModkeepError, Result};

pub const INSTALLED_DIR: &str = "_installed_";
pub const UNINSTALLED_DIR: &str = "_uninstalled_";

/// Handle on the mods directory and its tracking folders
#[derive(Debug, Clone)]
pub struct Intake {
    mods_dir: PathBuf,
}

impl Intake {
    /// Open the mods directory, creating the tracking folders if absent.
    ///
    /// The mods directory itself must already exist.
    pub fn new(mods_dir: &Path) -> Result<Self> {
        if !mods_dir.is_dir() {
            return Err(ModkeepError::Io {
                message: format!("Mods directory '{}' does not exist", mods_dir.display()),
            });
        }
        fs::create_dir_all(mods_dir.join(INSTALLED_DIR))?;
        fs::create_dir_all(mods_dir.join(UNINSTALLED_DIR))?;
        Ok(Self {
            mods_dir: mods_dir.to_path_buf(),
        })
    }

    pub fn installed_dir(&self) -> PathBuf {
        self.mods_dir.join(INSTALLED_DIR)
    }

    pub fn uninstalled_dir(&self) -> PathBuf {
        self.mods_dir.join(UNINSTALLED_DIR)
    }

    /// Candidate archives: mods dir root first, then `_uninstalled_`,
    /// each sorted by name for deterministic prompting.
    pub fn available(&self) -> Result<Vec<(String, PathBuf)>> {
        let mut candidates = list_zips(&self.mods_dir)?;
        candidates.extend(list_zips(&self.uninstalled_dir())?);
        Ok(candidates)
    }

    /// Resolve a candidate archive by bundle name
    pub fn find_available(&self, name: &str) -> Result<Option<PathBuf>> {
        Ok(self
            .available()?
            .into_iter()
            .find(|(n, _)| n == name)
            .map(|(_, path)| path))
    }
}

/// Zip files directly inside `dir` as (file name, full path), sorted by name
fn list_zips(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut zips = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.to_lowercase().ends_with(".zip") {
            zips.push((name.to_string(), path));
        }
    }
    zips.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(zips)
}
