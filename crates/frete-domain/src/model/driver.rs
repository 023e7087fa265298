//! Driver roster entry

use frete_types::{Facility, VehicleClass};
use serde::{Deserialize, Serialize};

/// A fixed driver known by plate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverEntry {
    /// Normalized plate (alphanumeric, uppercase)
    pub plate: String,
    pub name: String,
    pub facility: Facility,
    /// Class used instead of the vehicle text found in imported files
    pub vehicle_class: VehicleClass,
}
