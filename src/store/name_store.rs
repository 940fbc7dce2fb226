use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

const SCHEMA_VERSION: u32 = 1;

/// The one durable key the trainer keeps: the certificate name.
pub const NAME_FILE: &str = "name.json";

#[derive(Clone, Debug, Serialize, Deserialize)]
struct NameData {
    schema_version: u32,
    name: String,
}

impl Default for NameData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            name: String::new(),
        }
    }
}

/// Durable storage for the certificate name, surviving session restarts.
/// A missing or unreadable file reads as an empty name, never an error.
pub struct NameStore {
    base_dir: PathBuf,
}

impl NameStore {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kallkoll");
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn load(&self) -> String {
        let path = self.base_dir.join(NAME_FILE);
        if !path.exists() {
            return String::new();
        }
        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str::<NameData>(&content)
                .map(|data| data.name)
                .unwrap_or_default(),
            Err(_) => String::new(),
        }
    }

    /// Atomic write: tmp file, sync, rename over the final path.
    pub fn save(&self, name: &str) -> Result<()> {
        let data = NameData {
            schema_version: SCHEMA_VERSION,
            name: name.to_string(),
        };
        let path = self.base_dir.join(NAME_FILE);
        let tmp_path = path.with_extension("tmp");

        let json = serde_json::to_string_pretty(&data)?;
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_test_store() -> (TempDir, NameStore) {
        let dir = TempDir::new().unwrap();
        let store = NameStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_absent_file_reads_as_empty() {
        let (_dir, store) = make_test_store();
        assert_eq!(store.load(), "");
    }

    #[test]
    fn test_round_trip_within_and_across_instances() {
        let (dir, store) = make_test_store();
        store.save("Ada Lovelace").unwrap();
        assert_eq!(store.load(), "Ada Lovelace");

        // A fresh store over the same dir (i.e. a new session) sees the name.
        let store2 = NameStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        assert_eq!(store2.load(), "Ada Lovelace");
    }

    #[test]
    fn test_save_leaves_no_tmp_file() {
        let (dir, store) = make_test_store();
        store.save("X").unwrap();
        let tmp_files: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("tmp"))
            .collect();
        assert!(tmp_files.is_empty());
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let (dir, store) = make_test_store();
        fs::write(dir.path().join(NAME_FILE), "not json").unwrap();
        assert_eq!(store.load(), "");
    }
}
