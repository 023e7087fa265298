//! Fixed drivers known by license plate

use std::collections::HashMap;
use std::sync::LazyLock;

use frete_types::VehicleClass;

use crate::model::{Cdd, DriverEntry};

/// Built-in roster: plate, driver, facility, default vehicle class
const BUILTIN_ROSTER: &[(&str, &str, Cdd, VehicleClass)] = &[
    // CDD Contagem
    ("ANF6E07", "Anacleto Celestino Simão", Cdd::Contagem, VehicleClass::Vuc),
    ("GWH1A47", "Guilherme Spindola Reis Lobo", Cdd::Contagem, VehicleClass::Vuc),
    ("CPI6330", "Neyber Da Rocha", Cdd::Contagem, VehicleClass::Toco),
    ("NFC3385", "Johnny Gil De Sousa", Cdd::Contagem, VehicleClass::Toco),
    ("HJU2112", "Wemerson Alves De Oliveira", Cdd::Contagem, VehicleClass::Truck),
    ("JQI9E36", "Jose Augusto Farias Gonzaga", Cdd::Contagem, VehicleClass::Vuc),
    ("LNV2F26", "Altair Xavier Marques Neto", Cdd::Contagem, VehicleClass::Vuc),
    ("HEH3651", "Alisson Jones Evangelista Corr", Cdd::Contagem, VehicleClass::Toco),
    ("GSV5A52", "Raoni Barbosa De Oliveira", Cdd::Contagem, VehicleClass::Vuc),
    ("GRV6566", "Ronaldo Jose Da Silva", Cdd::Contagem, VehicleClass::Truck),
    // CDD Santa Luzia
    ("OVF5J11", "Joel Gabriel Da Silva", Cdd::SantaLuzia, VehicleClass::Vuc),
    ("OVF5J13", "Ricardo Alves Da Silva", Cdd::SantaLuzia, VehicleClass::Vuc),
    ("PWI2D86", "Thiago Estanislau Oliveira", Cdd::SantaLuzia, VehicleClass::Toco),
    ("OPZ7G60", "Weslley Lucas Pinheiro", Cdd::SantaLuzia, VehicleClass::Vuc),
    ("GYJ2C95", "Claudio Ribeiro De Assuncao", Cdd::SantaLuzia, VehicleClass::Truck),
];

static BUILTIN: LazyLock<DriverDirectory> = LazyLock::new(|| {
    DriverDirectory::from_entries(BUILTIN_ROSTER.iter().map(|(plate, name, cdd, class)| {
        DriverEntry {
            plate: plate.to_string(),
            name: name.to_string(),
            facility: cdd.facility(),
            vehicle_class: *class,
        }
    }))
});

/// Keep ASCII letters and digits, upper-cased (`"abc-1234"` -> `"ABC1234"`)
pub fn normalize_plate(plate: &str) -> String {
    plate
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Name used when a plate is not in the roster
pub fn placeholder_driver_name(map_ref: &str) -> String {
    if map_ref.is_empty() {
        "Motorista Não Identificado".to_string()
    } else {
        format!("Motorista (Rota {})", map_ref)
    }
}

/// Immutable plate -> driver lookup
#[derive(Debug, Clone, Default)]
pub struct DriverDirectory {
    drivers: HashMap<String, DriverEntry>,
}

impl DriverDirectory {
    /// The compiled-in roster
    pub fn builtin() -> &'static DriverDirectory {
        &BUILTIN
    }

    /// Build a directory, normalizing every plate key
    pub fn from_entries(entries: impl IntoIterator<Item = DriverEntry>) -> Self {
        let drivers = entries
            .into_iter()
            .map(|mut entry| {
                entry.plate = normalize_plate(&entry.plate);
                (entry.plate.clone(), entry)
            })
            .collect();
        Self { drivers }
    }

    pub fn lookup(&self, plate: &str) -> Option<&DriverEntry> {
        self.drivers.get(&normalize_plate(plate))
    }

    /// Roster name, or the map-qualified placeholder
    pub fn resolve_name(&self, plate: &str, map_ref: &str) -> String {
        self.lookup(plate)
            .map(|entry| entry.name.clone())
            .unwrap_or_else(|| placeholder_driver_name(map_ref))
    }

    /// All drivers, ordered by facility then name
    pub fn entries(&self) -> Vec<&DriverEntry> {
        let mut entries: Vec<_> = self.drivers.values().collect();
        entries.sort_by(|a, b| {
            a.facility
                .as_str()
                .cmp(b.facility.as_str())
                .then_with(|| a.name.cmp(&b.name))
        });
        entries
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frete_types::Facility;

    #[test]
    fn test_normalize_plate() {
        assert_eq!(normalize_plate("abc-1234"), "ABC1234");
        assert_eq!(normalize_plate(" OVF 5J11 "), "OVF5J11");
        assert_eq!(normalize_plate("--"), "");
    }

    #[test]
    fn test_lookup_ignores_case_and_punctuation() {
        let directory = DriverDirectory::builtin();
        let a = directory.lookup("OVF-5J11").unwrap();
        let b = directory.lookup("ovf5j11").unwrap();
        assert_eq!(a.name, "Joel Gabriel Da Silva");
        assert_eq!(a, b);
        assert_eq!(a.facility, Facility::SantaLuzia);
    }

    #[test]
    fn test_every_builtin_plate_is_stable() {
        let directory = DriverDirectory::builtin();
        assert_eq!(directory.len(), 15);
        for entry in directory.entries() {
            let lower = entry.plate.to_lowercase();
            let dashed = format!("{}-{}", &entry.plate[..3], &entry.plate[3..]);
            assert_eq!(directory.lookup(&lower).unwrap().name, entry.name);
            assert_eq!(directory.lookup(&dashed).unwrap().name, entry.name);
        }
    }

    #[test]
    fn test_resolve_name_fallbacks() {
        let directory = DriverDirectory::builtin();
        assert_eq!(
            directory.resolve_name("ANF-6E07", "77"),
            "Anacleto Celestino Simão"
        );
        assert_eq!(
            directory.resolve_name("XYZ9999", "4412"),
            "Motorista (Rota 4412)"
        );
        assert_eq!(
            directory.resolve_name("XYZ9999", ""),
            "Motorista Não Identificado"
        );
    }

    #[test]
    fn test_from_entries_normalizes_keys() {
        let directory = DriverDirectory::from_entries(vec![DriverEntry {
            plate: "abc-1d23".to_string(),
            name: "Test Driver".to_string(),
            facility: Facility::Contagem,
            vehicle_class: VehicleClass::Toco,
        }]);
        let entry = directory.lookup("ABC1D23").unwrap();
        assert_eq!(entry.plate, "ABC1D23");
        assert_eq!(entry.vehicle_class, VehicleClass::Toco);
    }
}
