//! File placement and removal for bundle archives
//!
//! Placement extracts an archive into the game directory preserving its
//! relative folder structure, then moves the archive into `_installed_`.
//! Removal deletes exactly the files the archive placed (by its entry list),
//! prunes directories that became empty, and moves the archive back to
//! `_uninstalled_`.
//!
//! Workflows talk to the [`Deploy`] trait so they can be tested without
//! touching real archives.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zip::ZipArchive;

use crate::error::{Result, placement_failed, removal_failed};
use crate::intake::Intake;
use crate::progress::ProgressDisplay;

/// Outcome of placing a bundle's files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementReport {
    /// Files newly copied into the game directory
    pub copied: usize,
    /// Existing files that were overwritten
    pub overwritten: usize,
}

/// Outcome of removing a bundle's files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovalReport {
    /// Files deleted from the game directory
    pub removed: usize,
    /// Archive entries with no matching file on disk
    pub missing: usize,
}

/// File placement/removal collaborator boundary
pub trait Deploy {
    /// Place the named bundle's files and relocate its archive to `_installed_`
    fn place(&self, name: &str) -> Result<PlacementReport>;

    /// Remove the named bundle's files and relocate its archive to `_uninstalled_`
    fn remove_files(&self, name: &str) -> Result<RemovalReport>;
}

/// Real deployer working on zip archives under the mods directory
pub struct ArchiveDeployer {
    game_dir: PathBuf,
    intake: Intake,
    show_progress: bool,
}

impl ArchiveDeployer {
    pub fn new(game_dir: PathBuf, intake: Intake) -> Self {
        Self {
            game_dir,
            intake,
            show_progress: true,
        }
    }

    /// Silence the progress bar (tests, scripting)
    pub fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    fn open_archive(&self, name: &str, path: &Path) -> Result<ZipArchive<File>> {
        let file =
            File::open(path).map_err(|e| placement_failed(name, format!("{}: {e}", path.display())))?;
        ZipArchive::new(file)
            .map_err(|e| placement_failed(name, format!("not a valid zip archive: {e}")))
    }
}

impl Deploy for ArchiveDeployer {
    fn place(&self, name: &str) -> Result<PlacementReport> {
        if !self.game_dir.is_dir() {
            return Err(placement_failed(
                name,
                format!("game directory '{}' does not exist", self.game_dir.display()),
            ));
        }
        let archive_path = self
            .intake
            .find_available(name)?
            .ok_or_else(|| placement_failed(name, "archive not found in intake locations"))?;

        let mut archive = self.open_archive(name, &archive_path)?;
        let scratch = tempfile::tempdir()?;
        archive
            .extract(scratch.path())
            .map_err(|e| placement_failed(name, format!("extraction failed: {e}")))?;

        let report = copy_tree(scratch.path(), &self.game_dir, self.show_progress)
            .map_err(|e| placement_failed(name, e.to_string()))?;

        let dest = unique_destination(&self.intake.installed_dir(), name);
        move_file(&archive_path, &dest)
            .map_err(|e| placement_failed(name, format!("failed to track archive: {e}")))?;

        Ok(report)
    }

    fn remove_files(&self, name: &str) -> Result<RemovalReport> {
        let archive_path = self.intake.installed_dir().join(name);
        if !archive_path.is_file() {
            return Err(removal_failed(name, "archive not tracked in _installed_"));
        }
        let mut archive = self
            .open_archive(name, &archive_path)
            .map_err(|e| removal_failed(name, e.to_string()))?;

        let mut report = RemovalReport::default();
        for i in 0..archive.len() {
            let entry = archive
                .by_index(i)
                .map_err(|e| removal_failed(name, format!("bad archive entry: {e}")))?;
            if entry.is_dir() {
                continue;
            }
            let Some(rel) = entry.enclosed_name() else {
                continue;
            };
            let target = self.game_dir.join(&rel);
            if target.is_file() {
                fs::remove_file(&target)
                    .map_err(|e| removal_failed(name, format!("{}: {e}", target.display())))?;
                report.removed += 1;
                if let Some(parent) = target.parent() {
                    prune_empty_dirs(parent, &self.game_dir);
                }
            } else {
                report.missing += 1;
            }
        }

        // A stale same-named copy in _uninstalled_ is replaced, not
        // suffixed: the bundle keeps a single identity for re-install.
        let dest = self.intake.uninstalled_dir().join(name);
        move_file(&archive_path, &dest)
            .map_err(|e| removal_failed(name, format!("failed to relocate archive: {e}")))?;

        Ok(report)
    }
}

/// Copy an extracted tree into the game directory, preserving relative paths
fn copy_tree(src: &Path, dst: &Path, show_progress: bool) -> std::io::Result<PlacementReport> {
    let total = WalkDir::new(src)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .count();
    let progress = show_progress.then(|| ProgressDisplay::new(total as u64));

    let mut report = PlacementReport::default();
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(std::io::Error::other)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(std::io::Error::other)?;
        let target = dst.join(rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        if target.exists() {
            report.overwritten += 1;
        } else {
            report.copied += 1;
        }
        fs::copy(entry.path(), &target)?;
        if let Some(ref pb) = progress {
            pb.update_file(&rel.display().to_string());
        }
    }
    if let Some(pb) = progress {
        pb.finish();
    }
    Ok(report)
}

/// Walk up from `dir`, removing directories as long as they are empty,
/// stopping at (and never removing) `root`
fn prune_empty_dirs(dir: &Path, root: &Path) {
    let mut current = dir.to_path_buf();
    while current != root && current.starts_with(root) {
        let is_empty = fs::read_dir(&current)
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(false);
        if !is_empty || fs::remove_dir(&current).is_err() {
            break;
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }
}

/// Pick a non-clobbering destination: `name.zip`, then `name_1.zip`, ...
fn unique_destination(dir: &Path, name: &str) -> PathBuf {
    let candidate = dir.join(name);
    if !candidate.exists() {
        return candidate;
    }
    let (base, ext) = match name.rsplit_once('.') {
        Some((base, ext)) => (base, ext),
        None => (name, ""),
    };
    let mut i = 1;
    loop {
        let suffixed = if ext.is_empty() {
            dir.join(format!("{base}_{i}"))
        } else {
            dir.join(format!("{base}_{i}.{ext}"))
        };
        if !suffixed.exists() {
            return suffixed;
        }
        i += 1;
    }
}

/// Rename with a copy/delete fallback for filesystems where rename fails
fn move_file(src: &Path, dst: &Path) -> std::io::Result<()> {
    if fs::rename(src, dst).is_ok() {
        return Ok(());
    }
    fs::copy(src, dst)?;
    fs::remove_file(src)
}
