use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tracing::warn;

/// Persisted set of every listing id ever notified, stored as a JSON
/// string array. Ids are only ever added, never removed, so a listing
/// that briefly drops out of the feed is not re-announced when it
/// returns.
pub struct SeenStore {
    path: PathBuf,
}

impl SeenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the saved id list. A missing file is created empty; an
    /// unreadable or unparsable file is treated as empty history
    /// rather than blocking the run.
    pub fn load(&self) -> Vec<String> {
        if !self.path.exists() {
            if let Err(e) = self.save(&[]) {
                warn!(error = %e, path = %self.path.display(), "Failed to initialize seen-listings file");
            }
            return Vec::new();
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "Failed to read seen-listings file");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(ids) => ids,
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "Ignoring unparsable seen-listings file");
                Vec::new()
            }
        }
    }

    /// Overwrites the file with the full id list. Not atomic; a crash
    /// mid-write leaves a file that `load` falls open on.
    pub fn save(&self, ids: &[String]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(ids)?)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.save(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_created_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("rentals.json");
        let store = SeenStore::new(&path);

        assert!(store.load().is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn unparsable_file_falls_open_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rentals.json");
        fs::write(&path, "not json {{{").unwrap();

        assert!(SeenStore::new(&path).load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = SeenStore::new(dir.path().join("rentals.json"));

        let ids = vec!["123".to_string(), "456".to_string()];
        store.save(&ids).unwrap();
        assert_eq!(store.load(), ids);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("rentals.json");

        SeenStore::new(&path).save(&["x".to_string()]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn clear_leaves_an_empty_list() {
        let dir = TempDir::new().unwrap();
        let store = SeenStore::new(dir.path().join("rentals.json"));

        store.save(&["123".to_string()]).unwrap();
        store.clear().unwrap();
        assert!(store.load().is_empty());
    }
}
