//! Driver roster loader from TOML
//!
//! ```toml
//! [[drivers]]
//! plate = "OVF-5J11"
//! name = "Joel Gabriel Da Silva"
//! facility = "Santa Luzia"
//! vehicle_class = "VUC"
//! ```

use std::fs;
use std::path::Path;

use frete_domain::{DriverDirectory, DriverEntry};
use frete_types::{ConfigError, Error, Result};
use serde::Deserialize;
use tracing::info;

/// Container for parsing a roster file
#[derive(Debug, Deserialize)]
struct RosterConfig {
    #[serde(default)]
    drivers: Vec<DriverEntry>,
}

/// Load a driver directory from a TOML file
pub fn load_roster_file(path: &Path) -> Result<DriverDirectory> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to read driver roster {}: {}",
            path.display(),
            e
        )))
    })?;

    let directory = load_roster_str(&content)?;
    info!(path = %path.display(), drivers = directory.len(), "driver roster loaded");
    Ok(directory)
}

/// Load a driver directory from TOML text
pub fn load_roster_str(toml_content: &str) -> Result<DriverDirectory> {
    let config: RosterConfig = toml::from_str(toml_content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to parse driver roster TOML: {}",
            e
        )))
    })?;

    Ok(DriverDirectory::from_entries(config.drivers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use frete_types::{Facility, VehicleClass};

    const TEST_TOML: &str = r#"
[[drivers]]
plate = "OVF-5J11"
name = "Joel Gabriel Da Silva"
facility = "Santa Luzia"
vehicle_class = "VUC"

[[drivers]]
plate = "abc1d23"
name = "Maria Souza"
facility = "Contagem"
vehicle_class = "TRUCK"
"#;

    #[test]
    fn test_load_from_str() {
        let directory = load_roster_str(TEST_TOML).unwrap();
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn test_plates_are_normalized() {
        let directory = load_roster_str(TEST_TOML).unwrap();
        let entry = directory.lookup("ABC-1D23").unwrap();
        assert_eq!(entry.name, "Maria Souza");
        assert_eq!(entry.facility, Facility::Contagem);
        assert_eq!(entry.vehicle_class, VehicleClass::Truck);
        assert_eq!(directory.lookup("OVF5J11").unwrap().plate, "OVF5J11");
    }

    #[test]
    fn test_invalid_class_is_config_error() {
        let bad = r#"
[[drivers]]
plate = "X1"
name = "X"
facility = "Contagem"
vehicle_class = "CARRETA"
"#;
        let err = load_roster_str(bad).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_empty_roster() {
        let directory = load_roster_str("").unwrap();
        assert!(directory.is_empty());
    }
}
