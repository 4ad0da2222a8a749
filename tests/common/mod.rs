//! Common test utilities for modkeep integration tests

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;
use zip::write::SimpleFileOptions;

/// A test workspace with a game directory and a mods directory
#[allow(dead_code)]
pub struct TestWorkspace {
    #[allow(dead_code)]
    temp: TempDir,
    pub game_dir: PathBuf,
    pub mods_dir: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let game_dir = temp.path().join("game");
        let mods_dir = temp.path().join("mods");
        std::fs::create_dir_all(&game_dir).expect("Failed to create game dir");
        std::fs::create_dir_all(&mods_dir).expect("Failed to create mods dir");
        Self {
            temp,
            game_dir,
            mods_dir,
        }
    }

    /// Write a zip archive into the mods directory root (install candidate)
    pub fn write_candidate(&self, name: &str, files: &[(&str, &str)]) {
        self.write_zip(&self.mods_dir.join(name), files);
    }

    /// Write a zip archive directly into `_installed_` (pre-installed bundle)
    pub fn write_installed_archive(&self, name: &str, files: &[(&str, &str)]) {
        let dir = self.mods_dir.join("_installed_");
        std::fs::create_dir_all(&dir).expect("Failed to create _installed_");
        self.write_zip(&dir.join(name), files);
    }

    fn write_zip(&self, path: &PathBuf, files: &[(&str, &str)]) {
        let file = File::create(path).expect("Failed to create zip");
        let mut zip = zip::ZipWriter::new(file);
        for (entry, content) in files {
            zip.start_file(*entry, SimpleFileOptions::default())
                .expect("Failed to start zip entry");
            zip.write_all(content.as_bytes())
                .expect("Failed to write zip entry");
        }
        zip.finish().expect("Failed to finish zip");
    }

    /// Write a file under the game directory, creating parent directories
    pub fn place_game_file(&self, rel: &str, content: &str) {
        let path = self.game_dir.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create game subdir");
        }
        std::fs::write(path, content).expect("Failed to place game file");
    }

    /// Seed the state file directly
    pub fn seed_state(&self, json: &str) {
        std::fs::write(self.mods_dir.join("dependencies.json"), json)
            .expect("Failed to seed state file");
    }

    /// Read the state file back
    pub fn read_state(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(self.mods_dir.join("dependencies.json"))
            .expect("Failed to read state file");
        serde_json::from_str(&content).expect("State file is not valid JSON")
    }

    pub fn state_file_exists(&self) -> bool {
        self.mods_dir.join("dependencies.json").exists()
    }

    /// Check whether a placed file exists under the game directory
    pub fn game_file_exists(&self, rel: &str) -> bool {
        self.game_dir.join(rel).exists()
    }

    pub fn game_dir_arg(&self) -> String {
        self.game_dir.display().to_string()
    }

    pub fn mods_dir_arg(&self) -> String {
        self.mods_dir.display().to_string()
    }
}
