use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json;

use crate::model::store::AttendanceStore;
use crate::repository::traits::StoreRepository;

#[derive(Clone)]
pub struct FileStoreRepository {
    file_path: PathBuf,
}

impl FileStoreRepository {
    /// `storage_key` is the file name inside `data_dir`, see `Profile::storage_key`.
    pub fn new(data_dir: &Path, storage_key: &str) -> Result<Self> {
        fs::create_dir_all(data_dir)?;
        let path = data_dir.join(storage_key);

        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &AttendanceStore::new())?;
            writer.flush()?;
        }

        Ok(FileStoreRepository { file_path: path })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn read_store(&self) -> Result<AttendanceStore> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let store = serde_json::from_reader(reader)?;
        Ok(store)
    }
}

impl StoreRepository for FileStoreRepository {
    fn load(&self) -> AttendanceStore {
        match self.read_store() {
            Ok(store) => {
                tracing::debug!(path = %self.file_path.display(), days = store.len(), "loaded attendance store");
                store
            }
            Err(e) => {
                tracing::warn!(path = %self.file_path.display(), error = %e, "could not read attendance store, starting empty");
                AttendanceStore::new()
            }
        }
    }

    fn save(&self, store: &AttendanceStore) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, store)?;
        writer.flush()?;
        tracing::debug!(path = %self.file_path.display(), days = store.len(), "saved attendance store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::trip::{DayStatus, Leg, Person};
    use chrono::NaiveDate;

    #[test]
    fn test_new_creates_empty_slot() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileStoreRepository::new(dir.path(), "data.json").unwrap();
        assert!(repo.path().exists());
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileStoreRepository::new(dir.path(), "data.json").unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 2, 12).unwrap();
        let store = AttendanceStore::new()
            .set_trip_state(date, Person::Jorge, Leg::Return, true)
            .set_day_status(date, Person::William, DayStatus::Full);

        repo.save(&store).unwrap();
        assert_eq!(repo.load(), store);

        // a second repository over the same file sees the same data
        let reopened = FileStoreRepository::new(dir.path(), "data.json").unwrap();
        assert_eq!(reopened.load(), store);
    }

    #[test]
    fn test_malformed_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileStoreRepository::new(dir.path(), "data.json").unwrap();
        fs::write(repo.path(), "{ not json").unwrap();
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_profiles_use_separate_slots() {
        let dir = tempfile::tempdir().unwrap();
        let basic = FileStoreRepository::new(dir.path(), "moto_tracker_data.json").unwrap();
        let extended = FileStoreRepository::new(dir.path(), "moto_tracker_data_v2.json").unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 2, 12).unwrap();

        basic.save(&AttendanceStore::new().set_day_status(date, Person::Jorge, DayStatus::Full)).unwrap();
        assert!(extended.load().is_empty());
    }
}
