// src/storage.rs

//! Flat-file cache for fetched wiki content and parsed records.
//!
//! Two artifacts live under the cache directory: the raw fetched page and
//! the parsed record list as a JSON array. Single-process, low-frequency
//! use; no write atomicity is required.

use std::fs;
use std::path::PathBuf;

use crate::error::Result;
use crate::models::StadiumRecord;

/// Raw fetched content, UTF-8 text.
pub const RAW_PAGE_FILE: &str = "rawPage.html";

/// Parsed records, JSON array.
pub const RECORDS_FILE: &str = "stadiums.json";

/// Cached state loaded from disk.
#[derive(Debug, Default)]
pub struct CacheState {
    pub raw: String,
    pub records: Vec<StadiumRecord>,
}

impl CacheState {
    /// A usable cache needs both the raw page and at least one parsed record.
    pub fn is_miss(&self) -> bool {
        self.raw.is_empty() || self.records.is_empty()
    }
}

/// Cache store rooted at a directory.
#[derive(Debug, Clone)]
pub struct CacheStore {
    root_dir: PathBuf,
}

impl CacheStore {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    pub fn raw_path(&self) -> PathBuf {
        self.root_dir.join(RAW_PAGE_FILE)
    }

    pub fn records_path(&self) -> PathBuf {
        self.root_dir.join(RECORDS_FILE)
    }

    /// Load cached state. Absent, unreadable or unparsable artifacts read
    /// as empty: a cache miss is a recoverable state, never an error.
    pub fn load(&self) -> CacheState {
        let raw = fs::read_to_string(self.raw_path()).unwrap_or_default();

        let records = match fs::read_to_string(self.records_path()) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|error| {
                log::debug!("Ignoring unparsable record cache: {error}");
                Vec::new()
            }),
            Err(_) => Vec::new(),
        };

        CacheState { raw, records }
    }

    /// Overwrite both cache artifacts, creating the directory on first run.
    pub fn save(&self, raw: &str, records: &[StadiumRecord]) -> Result<()> {
        fs::create_dir_all(&self.root_dir)?;
        fs::write(self.raw_path(), raw)?;

        let json = serde_json::to_string_pretty(records)?;
        fs::write(self.records_path(), json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_records() -> Vec<StadiumRecord> {
        vec![StadiumRecord {
            name: "Ford Field".to_string(),
            capacity: 65_000,
            img_url: "https://en.wikipedia.org/wiki/File:Ford_Field.jpg".to_string(),
            city: "Detroit, Michigan".to_string(),
            surface: "FieldTurf".to_string(),
            roof_type: "Fixed".to_string(),
            teams: vec!["Detroit Lions".to_string()],
            year_opened: 2002,
            shared_stadium: false,
            current_teams: vec!["DET".to_string()],
            coordinates: None,
        }]
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let store = CacheStore::new(tmp.path());

        let records = sample_records();
        store.save("<html>raw</html>", &records).unwrap();

        let state = store.load();
        assert!(!state.is_miss());
        assert_eq!(state.raw, "<html>raw</html>");
        assert_eq!(state.records, records);
    }

    #[test]
    fn test_load_missing_files_is_a_miss() {
        let tmp = TempDir::new().unwrap();
        let store = CacheStore::new(tmp.path().join("nested/never-created"));

        let state = store.load();
        assert!(state.is_miss());
        assert!(state.raw.is_empty());
        assert!(state.records.is_empty());
    }

    #[test]
    fn test_load_corrupt_json_is_a_miss() {
        let tmp = TempDir::new().unwrap();
        let store = CacheStore::new(tmp.path());

        fs::write(store.raw_path(), "<html>raw</html>").unwrap();
        fs::write(store.records_path(), "{ not json ]").unwrap();

        let state = store.load();
        assert!(state.is_miss());
        assert_eq!(state.raw, "<html>raw</html>");
        assert!(state.records.is_empty());
    }

    #[test]
    fn test_raw_without_records_is_a_miss() {
        let tmp = TempDir::new().unwrap();
        let store = CacheStore::new(tmp.path());

        store.save("<html>raw</html>", &[]).unwrap();
        assert!(store.load().is_miss());
    }

    #[test]
    fn test_save_creates_cache_directory() {
        let tmp = TempDir::new().unwrap();
        let store = CacheStore::new(tmp.path().join("resources"));

        store.save("raw", &sample_records()).unwrap();
        assert!(store.raw_path().exists());
        assert!(store.records_path().exists());
    }

    #[test]
    fn test_save_overwrites_previous_artifacts() {
        let tmp = TempDir::new().unwrap();
        let store = CacheStore::new(tmp.path());

        store.save("first", &sample_records()).unwrap();
        store.save("second", &[]).unwrap();

        let state = store.load();
        assert_eq!(state.raw, "second");
        assert!(state.records.is_empty());
    }
}
