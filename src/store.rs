//! Bundle store: the set of known bundles and their install status
//!
//! Entries are kept in registration order so listings, prompts, and the
//! rendered graph stay deterministic across runs.

use crate::error::{Result, duplicate_bundle, unknown_bundle};

/// Install status of a tracked bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Installed,
    Uninstalled,
}

#[derive(Debug, Clone)]
struct BundleEntry {
    name: String,
    status: Status,
}

/// Insertion-ordered set of known bundles
///
/// Lookups are linear scans; the tool manages tens to low hundreds of
/// bundles, so a Vec beats the bookkeeping of an ordered map here.
#[derive(Debug, Clone, Default)]
pub struct BundleStore {
    entries: Vec<BundleEntry>,
}

impl BundleStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, name: &str) -> Option<&BundleEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut BundleEntry> {
        self.entries.iter_mut().find(|e| e.name == name)
    }

    /// Register a bundle as Uninstalled.
    ///
    /// Re-registering an existing Uninstalled entry is a no-op; registering
    /// a name that is already Installed fails.
    pub fn register(&mut self, name: &str) -> Result<()> {
        match self.find(name) {
            Some(entry) if entry.status == Status::Installed => Err(duplicate_bundle(name)),
            Some(_) => Ok(()),
            None => {
                self.entries.push(BundleEntry {
                    name: name.to_string(),
                    status: Status::Uninstalled,
                });
                Ok(())
            }
        }
    }

    pub fn mark_installed(&mut self, name: &str) -> Result<()> {
        self.set_status(name, Status::Installed)
    }

    #[allow(dead_code)]
    pub fn mark_uninstalled(&mut self, name: &str) -> Result<()> {
        self.set_status(name, Status::Uninstalled)
    }

    fn set_status(&mut self, name: &str, status: Status) -> Result<()> {
        let entry = self.find_mut(name).ok_or_else(|| unknown_bundle(name))?;
        entry.status = status;
        Ok(())
    }

    /// Delete a bundle entry entirely
    pub fn remove(&mut self, name: &str) -> Result<()> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| unknown_bundle(name))?;
        self.entries.remove(pos);
        Ok(())
    }

    pub fn status(&self, name: &str) -> Option<Status> {
        self.find(name).map(|e| e.status)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn is_installed(&self, name: &str) -> bool {
        self.status(name) == Some(Status::Installed)
    }

    /// Installed bundle names in registration order
    pub fn installed(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.status == Status::Installed)
            .map(|e| e.name.as_str())
    }

    /// Uninstalled bundle names in registration order
    pub fn uninstalled(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.status == Status::Uninstalled)
            .map(|e| e.name.as_str())
    }

    /// All entries as (name, status) in registration order
    pub fn entries(&self) -> impl Iterator<Item = (&str, Status)> {
        self.entries.iter().map(|e| (e.name.as_str(), e.status))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
