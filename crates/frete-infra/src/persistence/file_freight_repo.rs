//! File-based implementation of FreightRepository
//!
//! The whole list lives in one JSON array, newest first.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use frete_domain::FreightRepository;
use frete_types::{Result, StoredFreight};
use tracing::debug;
use uuid::Uuid;

/// File name inside the store directory
pub const STORAGE_FILE: &str = "cdd_freight_system_v1.json";

pub struct FileFreightRepository {
    store_path: PathBuf,
    records: RefCell<Vec<StoredFreight>>,
}

impl FileFreightRepository {
    /// Create or load the record list in `store_dir`
    ///
    /// A corrupt file is an error; it is never replaced with an empty list.
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join(STORAGE_FILE);

        let records = if store_path.exists() {
            let file = File::open(&store_path)?;
            serde_json::from_reader(BufReader::new(file))?
        } else {
            Vec::new()
        };

        Ok(Self {
            store_path,
            records: RefCell::new(records),
        })
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Write `records` to disk; the in-memory list is swapped only after this succeeds
    fn persist(&self, records: &[StoredFreight]) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.flush()?;
        debug!(path = %self.store_path.display(), count = records.len(), "records saved");
        Ok(())
    }
}

impl FreightRepository for FileFreightRepository {
    fn find_all(&self) -> Result<Vec<StoredFreight>> {
        Ok(self.records.borrow().clone())
    }

    fn prepend(&self, records: Vec<StoredFreight>) -> Result<()> {
        let mut merged = records;
        merged.extend(self.records.borrow().iter().cloned());

        self.persist(&merged)?;
        *self.records.borrow_mut() = merged;
        Ok(())
    }

    fn delete(&self, id: Uuid) -> Result<bool> {
        let remaining: Vec<_> = self
            .records
            .borrow()
            .iter()
            .filter(|r| r.id != id)
            .cloned()
            .collect();
        if remaining.len() == self.records.borrow().len() {
            return Ok(false);
        }

        self.persist(&remaining)?;
        *self.records.borrow_mut() = remaining;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use frete_types::{Facility, FreightRecord, VehicleClass};
    use tempfile::tempdir;

    fn stored(map: &str) -> StoredFreight {
        StoredFreight::new(
            FreightRecord {
                driver_name: "Neyber Da Rocha".to_string(),
                license_plate: "CPI6330".to_string(),
                vehicle_class: VehicleClass::Toco,
                map: map.to_string(),
                city: "Contagem".to_string(),
                region: String::new(),
                date: "2024-03-05".to_string(),
                facility: Facility::Contagem,
                delivery_count: 9,
                price: 900.0,
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_open_empty() {
        let dir = tempdir().unwrap();
        let repo = FileFreightRepository::open(dir.path().to_path_buf()).unwrap();
        assert!(repo.find_all().unwrap().is_empty());
        assert!(!repo.store_path().exists());
    }

    #[test]
    fn test_prepend_keeps_block_order_and_persists() {
        let dir = tempdir().unwrap();
        let repo = FileFreightRepository::open(dir.path().to_path_buf()).unwrap();
        repo.prepend(vec![stored("old")]).unwrap();
        repo.prepend(vec![stored("a"), stored("b")]).unwrap();

        let reopened = FileFreightRepository::open(dir.path().to_path_buf()).unwrap();
        let maps: Vec<_> = reopened
            .find_all()
            .unwrap()
            .into_iter()
            .map(|r| r.record.map)
            .collect();
        assert_eq!(maps, vec!["a", "b", "old"]);
    }

    #[test]
    fn test_delete() {
        let dir = tempdir().unwrap();
        let repo = FileFreightRepository::open(dir.path().to_path_buf()).unwrap();
        let record = stored("x");
        let id = record.id;
        repo.prepend(vec![record]).unwrap();

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert!(repo.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(STORAGE_FILE), "not json").unwrap();
        assert!(FileFreightRepository::open(dir.path().to_path_buf()).is_err());
    }

    #[test]
    fn test_failed_save_leaves_list_unchanged() {
        let dir = tempdir().unwrap();
        let repo = FileFreightRepository::open(dir.path().to_path_buf()).unwrap();
        let kept = stored("kept");
        repo.prepend(vec![kept.clone()]).unwrap();

        // A directory at the store path makes every write fail
        fs::remove_file(repo.store_path()).unwrap();
        fs::create_dir(repo.store_path()).unwrap();

        assert!(repo.prepend(vec![stored("lost")]).is_err());
        assert!(repo.delete(kept.id).is_err());

        let maps: Vec<_> = repo
            .find_all()
            .unwrap()
            .into_iter()
            .map(|r| r.record.map)
            .collect();
        assert_eq!(maps, vec!["kept"]);
    }
}
