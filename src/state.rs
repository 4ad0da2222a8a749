//! Persisted mod state (`dependencies.json`)
//!
//! The whole state file is the unit of consistency: it is loaded once at the
//! start of a command, mutated in memory, and written back once at the end.
//! A missing file means an empty state; an unparsable one is an error that
//! names the file.
//!
//! Record shape, keyed by bundle in registration order:
//!
//! ```json
//! {
//!   "bundles": [
//!     { "name": "hd-pack.zip", "installed": true, "dependencies": ["core.zip"] }
//!   ]
//! }
//! ```
//!
//! The reverse (dependants) relation is intentionally not persisted; it is
//! derived from the dependency lists on every lookup.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModkeepError, Result};
use crate::graph::DependencyGraph;
use crate::store::{BundleStore, Status};

/// State file name inside the mods directory
pub const STATE_FILE: &str = "dependencies.json";

#[derive(Debug, Serialize, Deserialize)]
struct BundleRecord {
    name: String,
    installed: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    dependencies: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StateFile {
    #[serde(default)]
    bundles: Vec<BundleRecord>,
}

/// In-memory mod state: bundle store + dependency graph as one value.
///
/// Workflows mutate this value; the command layer decides whether the result
/// gets persisted. Nothing in here touches the filesystem except
/// [`ModState::load`] and [`ModState::save`].
#[derive(Debug, Clone, Default)]
pub struct ModState {
    pub store: BundleStore,
    pub graph: DependencyGraph,
}

impl ModState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load state from `<mods_dir>/dependencies.json`; missing file is empty state
    pub fn load(mods_dir: &Path) -> Result<Self> {
        let path = mods_dir.join(STATE_FILE);
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = fs::read_to_string(&path)?;
        let file: StateFile =
            serde_json::from_str(&content).map_err(|e| ModkeepError::StateParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Self::from_records(file)
    }

    /// Write state atomically: temp file in the same directory, then rename
    pub fn save(&self, mods_dir: &Path) -> Result<()> {
        let path = mods_dir.join(STATE_FILE);
        let json = serde_json::to_string_pretty(&self.to_records())?;

        let mut tmp = tempfile::NamedTempFile::new_in(mods_dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.write_all(b"\n")?;
        tmp.persist(&path).map_err(|e| ModkeepError::Io {
            message: format!("Failed to persist state file: {e}"),
        })?;
        Ok(())
    }

    fn from_records(file: StateFile) -> Result<Self> {
        let mut state = Self::new();
        for record in file.bundles {
            state.store.register(&record.name)?;
            if record.installed {
                state.store.mark_installed(&record.name)?;
            }
            state.graph.insert_raw(record.name, record.dependencies);
        }
        Ok(state)
    }

    fn to_records(&self) -> StateFile {
        let bundles = self
            .store
            .entries()
            .map(|(name, status)| BundleRecord {
                name: name.to_string(),
                installed: status == Status::Installed,
                dependencies: self.graph.dependencies_of(name).to_vec(),
            })
            .collect();
        StateFile { bundles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_state() -> ModState {
        let mut state = ModState::new();
        state.store.register("core.zip").unwrap();
        state.store.mark_installed("core.zip").unwrap();
        state.store.register("hd-pack.zip").unwrap();
        state.store.mark_installed("hd-pack.zip").unwrap();
        state.store.register("extras.zip").unwrap();
        let store = state.store.clone();
        state
            .graph
            .add_dependency(&store, "hd-pack.zip", "core.zip")
            .unwrap();
        state
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let state = ModState::load(temp.path()).unwrap();
        assert!(state.store.is_empty());
    }

    #[test]
    fn test_load_unparsable_file_errors() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(STATE_FILE), "{ not json").unwrap();
        let err = ModState::load(temp.path()).unwrap_err();
        assert!(matches!(err, ModkeepError::StateParseFailed { .. }));
        assert!(err.to_string().contains(STATE_FILE));
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let state = sample_state();
        state.save(temp.path()).unwrap();

        let loaded = ModState::load(temp.path()).unwrap();
        let names: Vec<_> = loaded.store.entries().collect();
        assert_eq!(
            names,
            vec![
                ("core.zip", Status::Installed),
                ("hd-pack.zip", Status::Installed),
                ("extras.zip", Status::Uninstalled),
            ]
        );
        assert_eq!(
            loaded.graph.dependencies_of("hd-pack.zip"),
            ["core.zip".to_string()]
        );
        assert_eq!(
            loaded.graph.dependants_of("core.zip"),
            vec!["hd-pack.zip".to_string()]
        );
    }

    #[test]
    fn test_save_overwrites_previous_state() {
        let temp = TempDir::new().unwrap();
        sample_state().save(temp.path()).unwrap();

        let mut state = ModState::load(temp.path()).unwrap();
        state.store.remove("extras.zip").unwrap();
        state.save(temp.path()).unwrap();

        let loaded = ModState::load(temp.path()).unwrap();
        assert_eq!(loaded.store.entries().count(), 2);
        assert!(!loaded.store.contains("extras.zip"));
    }

    #[test]
    fn test_empty_dependency_lists_are_omitted() {
        let temp = TempDir::new().unwrap();
        sample_state().save(temp.path()).unwrap();
        let content = std::fs::read_to_string(temp.path().join(STATE_FILE)).unwrap();
        // core.zip has no deps, so its record carries no dependencies key
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        let core = &json["bundles"][0];
        assert_eq!(core["name"], "core.zip");
        assert!(core.get("dependencies").is_none());
    }

    #[test]
    fn test_load_tolerates_cyclic_state() {
        // Hand-edited file with a cycle still loads; traversals stay guarded
        let temp = TempDir::new().unwrap();
        let content = r#"{"bundles":[
            {"name":"a.zip","installed":true,"dependencies":["b.zip"]},
            {"name":"b.zip","installed":true,"dependencies":["a.zip"]}
        ]}"#;
        std::fs::write(temp.path().join(STATE_FILE), content).unwrap();
        let state = ModState::load(temp.path()).unwrap();
        assert_eq!(state.graph.reachable_from("a.zip").len(), 2);
    }
}
