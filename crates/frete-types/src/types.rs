//! Freight record and import batch types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Origin distribution center (CDD)
///
/// Only `SantaLuzia` and `Contagem` carry negotiated tariffs. Any other
/// name is kept verbatim and always prices at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Facility {
    #[default]
    SantaLuzia,
    Contagem,
    Other(String),
}

impl Facility {
    pub fn as_str(&self) -> &str {
        match self {
            Facility::SantaLuzia => "Santa Luzia",
            Facility::Contagem => "Contagem",
            Facility::Other(name) => name,
        }
    }

    /// Whether a tariff exists for this facility
    pub fn is_known(&self) -> bool {
        !matches!(self, Facility::Other(_))
    }

    /// Parse a facility name, matching the two known CDDs case-insensitively
    pub fn parse(name: &str) -> Self {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case("Santa Luzia") {
            Facility::SantaLuzia
        } else if trimmed.eq_ignore_ascii_case("Contagem") {
            Facility::Contagem
        } else {
            Facility::Other(trimmed.to_string())
        }
    }
}

impl From<String> for Facility {
    fn from(value: String) -> Self {
        Facility::parse(&value)
    }
}

impl From<Facility> for String {
    fn from(value: Facility) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for Facility {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Facility::parse(s))
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse vehicle category used for pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VehicleClass {
    Vuc,
    Toco,
    Truck,
    Other,
}

impl VehicleClass {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleClass::Vuc => "VUC",
            VehicleClass::Toco => "TOCO",
            VehicleClass::Truck => "TRUCK",
            VehicleClass::Other => "OTHER",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VehicleClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "VUC" => Ok(VehicleClass::Vuc),
            "TOCO" => Ok(VehicleClass::Toco),
            "TRUCK" => Ok(VehicleClass::Truck),
            "OTHER" => Ok(VehicleClass::Other),
            other => Err(format!("unknown vehicle class: {}", other)),
        }
    }
}

/// One priced delivery run
///
/// `price` is computed once from facility, vehicle class, zone and count
/// when the record is created and is never edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreightRecord {
    pub driver_name: String,
    /// Alphanumeric, uppercase
    pub license_plate: String,
    pub vehicle_class: VehicleClass,
    /// Map / route reference number
    #[serde(default)]
    pub map: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub region: String,
    /// `YYYY-MM-DD` (unvalidated passthrough for non-slash input)
    pub date: String,
    pub facility: Facility,
    pub delivery_count: i64,
    pub price: f64,
}

/// A freight record as persisted by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFreight {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub record: FreightRecord,
}

impl StoredFreight {
    pub fn new(record: FreightRecord, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at,
            record,
        }
    }
}

/// Why a CSV row was skipped
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum RowFailureReason {
    #[error("expected more than {required} fields, found {found}")]
    TooFewFields { found: usize, required: usize },

    #[error("license plate is empty")]
    MissingPlate,

    #[error("delivery count is empty")]
    MissingCount,

    #[error("delivery count is not an integer: {0}")]
    InvalidCount(String),
}

/// A skipped CSV row, with its 1-based line number in the payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowFailure {
    pub line: usize,
    pub reason: RowFailureReason,
}

/// Outcome of one CSV import call
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportBatchResult {
    /// Successful records in input line order
    pub records: Vec<FreightRecord>,
    pub success_count: usize,
    pub failure_count: usize,
    pub failures: Vec<RowFailure>,
}

impl ImportBatchResult {
    /// No row survived; callers report the whole file as invalid
    pub fn is_total_failure(&self) -> bool {
        self.success_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facility_parse() {
        assert_eq!(Facility::parse("Santa Luzia"), Facility::SantaLuzia);
        assert_eq!(Facility::parse(" contagem "), Facility::Contagem);
        assert_eq!(
            Facility::parse("Betim"),
            Facility::Other("Betim".to_string())
        );
        assert!(!Facility::parse("Betim").is_known());
    }

    #[test]
    fn test_facility_serde_as_plain_string() {
        let json = serde_json::to_string(&Facility::SantaLuzia).unwrap();
        assert_eq!(json, "\"Santa Luzia\"");
        let back: Facility = serde_json::from_str("\"Betim\"").unwrap();
        assert_eq!(back, Facility::Other("Betim".to_string()));
    }

    #[test]
    fn test_vehicle_class_roundtrip_label() {
        for class in [
            VehicleClass::Vuc,
            VehicleClass::Toco,
            VehicleClass::Truck,
            VehicleClass::Other,
        ] {
            assert_eq!(class.label().parse::<VehicleClass>().unwrap(), class);
        }
        assert!("carreta".parse::<VehicleClass>().is_err());
    }

    #[test]
    fn test_stored_freight_flattens_record() {
        let record = FreightRecord {
            driver_name: "Joel Gabriel Da Silva".to_string(),
            license_plate: "OVF5J11".to_string(),
            vehicle_class: VehicleClass::Vuc,
            map: "1001".to_string(),
            city: "Confins".to_string(),
            region: String::new(),
            date: "2024-03-05".to_string(),
            facility: Facility::SantaLuzia,
            delivery_count: 12,
            price: 750.0,
        };
        let stored = StoredFreight::new(record, Utc::now());
        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value["facility"], "Santa Luzia");
        assert_eq!(value["vehicle_class"], "VUC");
        assert!(value.get("id").is_some());
    }
}
