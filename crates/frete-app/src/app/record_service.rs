//! Record list use cases over a FreightRepository

use std::path::Path;

use chrono::{NaiveDate, Utc};
use frete_domain::{
    classify_vehicle, normalize_date, normalize_plate, resolve_rate, DriverDirectory,
    FreightRepository,
};
use frete_infra::import_batch_with;
use frete_infra::text_decoder::read_text_file;
use frete_types::{
    Error, Facility, FreightRecord, ImportBatchResult, Result, StoredFreight, VehicleClass,
};
use tracing::{info, warn};
use uuid::Uuid;

use super::query::{compute_stats, filter_and_sort, DashboardStats, RecordQuery};

/// A freight typed in by hand
#[derive(Debug, Clone, Default)]
pub struct ManualEntry {
    /// Looked up from the plate when absent
    pub driver_name: Option<String>,
    pub license_plate: String,
    pub vehicle_text: String,
    pub map: String,
    pub city: String,
    pub region: String,
    /// `DD/MM/YYYY` or `YYYY-MM-DD`
    pub date: String,
    pub facility: Facility,
    pub delivery_count: i64,
}

impl ManualEntry {
    fn validate(&self) -> Result<()> {
        if normalize_plate(&self.license_plate).is_empty() {
            return Err(Error::Validation("license plate is required".to_string()));
        }
        if self.vehicle_text.trim().is_empty() {
            return Err(Error::Validation("vehicle type is required".to_string()));
        }
        if classify_vehicle(&self.vehicle_text) == VehicleClass::Other {
            return Err(Error::Validation(format!(
                "unrecognized vehicle type '{}' (expected VUC, TOCO or TRUCK)",
                self.vehicle_text.trim()
            )));
        }
        if self.delivery_count < 1 {
            return Err(Error::Validation(format!(
                "delivery count must be at least 1 (got {})",
                self.delivery_count
            )));
        }
        if self.date.trim().is_empty() {
            return Err(Error::Validation("date is required".to_string()));
        }
        Ok(())
    }
}

pub struct RecordService<R: FreightRepository> {
    repo: R,
    directory: DriverDirectory,
}

impl<R: FreightRepository> RecordService<R> {
    pub fn new(repo: R, directory: DriverDirectory) -> Self {
        Self { repo, directory }
    }

    pub fn directory(&self) -> &DriverDirectory {
        &self.directory
    }

    /// Price, store and return a manual entry
    pub fn add_manual(&self, entry: ManualEntry) -> Result<StoredFreight> {
        entry.validate()?;

        let driver_name = match entry.driver_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.directory.resolve_name(&entry.license_plate, &entry.map),
        };
        let price = resolve_rate(
            &entry.facility,
            &entry.vehicle_text,
            entry.delivery_count,
            &entry.city,
            &entry.region,
        );

        let record = FreightRecord {
            driver_name,
            license_plate: normalize_plate(&entry.license_plate),
            vehicle_class: classify_vehicle(&entry.vehicle_text),
            map: entry.map.trim().to_string(),
            city: entry.city.trim().to_string(),
            region: entry.region.trim().to_string(),
            date: normalize_date(entry.date.trim()),
            facility: entry.facility,
            delivery_count: entry.delivery_count,
            price,
        };
        let stored = StoredFreight::new(record, Utc::now());
        self.repo.prepend(vec![stored.clone()])?;

        info!(
            id = %stored.id,
            plate = %stored.record.license_plate,
            price = stored.record.price,
            "manual freight added"
        );
        Ok(stored)
    }

    /// Import decoded CSV text; nothing is stored unless a row succeeds
    pub fn import_text(&self, text: &str, facility: &Facility) -> Result<ImportBatchResult> {
        let result = import_batch_with(text, facility, &self.directory);

        if result.is_total_failure() {
            warn!(failures = result.failure_count, "import rejected, no valid row");
            return Err(Error::Validation(
                "no valid record found in file".to_string(),
            ));
        }

        let created_at = Utc::now();
        let batch = result
            .records
            .iter()
            .cloned()
            .map(|record| StoredFreight::new(record, created_at))
            .collect();
        self.repo.prepend(batch)?;

        info!(
            facility = %facility,
            imported = result.success_count,
            skipped = result.failure_count,
            "import stored"
        );
        Ok(result)
    }

    pub fn import_file(&self, path: &Path, facility: &Facility) -> Result<ImportBatchResult> {
        info!(path = %path.display(), facility = %facility, "importing CSV");
        let text = read_text_file(path)?;
        self.import_text(&text, facility)
    }

    pub fn all(&self) -> Result<Vec<StoredFreight>> {
        self.repo.find_all()
    }

    pub fn list(&self, query: &RecordQuery, today: NaiveDate) -> Result<Vec<StoredFreight>> {
        Ok(filter_and_sort(self.repo.find_all()?, query, today))
    }

    pub fn stats(&self) -> Result<DashboardStats> {
        Ok(compute_stats(&self.repo.find_all()?))
    }

    pub fn delete(&self, id: Uuid) -> Result<()> {
        if self.repo.delete(id)? {
            info!(%id, "freight deleted");
            Ok(())
        } else {
            Err(Error::NotFound(format!("freight {}", id)))
        }
    }
}
