//! Free-text vehicle description to vehicle class
//!
//! Rules are tried in order and the first match wins. Word patterns use
//! `\b` so "VUC" does not match inside a longer token like "VUCA".

use std::sync::LazyLock;

use frete_types::VehicleClass;
use regex::Regex;

use super::normalize_text;

const VEHICLE_RULES: &[(VehicleClass, &str)] = &[
    // "3/4" ton notation, with or without spaces, "/" or "-"
    (VehicleClass::Vuc, r"\bVUC\b|3\s*[/\-]\s*4|\bHR\b|\bVAN\b"),
    (VehicleClass::Toco, r"\bTOCO\b"),
    (VehicleClass::Truck, r"\bTRUCK\b|\bTRUCADO\b"),
];

static COMPILED_RULES: LazyLock<Vec<(VehicleClass, Regex)>> = LazyLock::new(|| {
    VEHICLE_RULES
        .iter()
        .map(|(class, pattern)| {
            (
                *class,
                Regex::new(pattern).expect("vehicle rule pattern must compile"),
            )
        })
        .collect()
});

/// Classify already-normalized vehicle text
pub fn classify(normalized: &str) -> VehicleClass {
    COMPILED_RULES
        .iter()
        .find(|(_, re)| re.is_match(normalized))
        .map(|(class, _)| *class)
        .unwrap_or(VehicleClass::Other)
}

/// Normalize then classify raw vehicle text
pub fn classify_vehicle(raw: &str) -> VehicleClass {
    classify(&normalize_text(raw))
}
