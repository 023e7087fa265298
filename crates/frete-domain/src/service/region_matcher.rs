//! Negotiated premium zones per facility
//!
//! Only Contagem's Esmeraldas rule is whole-word. The Santa Luzia patterns
//! accept abbreviated forms ("P. LEOPOLDO", "L SANTA") and match anywhere
//! in the location text.

use std::sync::LazyLock;

use frete_types::Facility;
use regex::Regex;

use crate::model::Cdd;

struct ZoneRule {
    cdd: Cdd,
    name: &'static str,
    pattern: &'static str,
}

const ZONE_RULES: &[ZoneRule] = &[
    ZoneRule {
        cdd: Cdd::Contagem,
        name: "Esmeraldas",
        pattern: r"\bESMERALDAS\b",
    },
    ZoneRule {
        cdd: Cdd::SantaLuzia,
        name: "Pedro Leopoldo",
        pattern: r"PEDRO\s+LEOPOLDO|P\.?\s*LEOPOLDO",
    },
    ZoneRule {
        cdd: Cdd::SantaLuzia,
        name: "Confins",
        pattern: r"CONFINS",
    },
    ZoneRule {
        cdd: Cdd::SantaLuzia,
        name: "Matozinhos",
        pattern: r"MATOZINHOS",
    },
    ZoneRule {
        cdd: Cdd::SantaLuzia,
        name: "Lagoa Santa",
        pattern: r"LAGOA\s+SANTA|L\.?\s*SANTA",
    },
];

static COMPILED_ZONES: LazyLock<Vec<(Cdd, &'static str, Regex)>> = LazyLock::new(|| {
    ZONE_RULES
        .iter()
        .map(|rule| {
            (
                rule.cdd,
                rule.name,
                Regex::new(rule.pattern).expect("zone rule pattern must compile"),
            )
        })
        .collect()
});

/// Name of the premium zone the normalized location falls in, if any
pub fn matched_zone(facility: &Facility, normalized_location: &str) -> Option<&'static str> {
    let cdd = Cdd::from_facility(facility)?;
    if normalized_location.is_empty() {
        return None;
    }
    COMPILED_ZONES
        .iter()
        .filter(|(rule_cdd, _, _)| *rule_cdd == cdd)
        .find(|(_, _, re)| re.is_match(normalized_location))
        .map(|(_, name, _)| *name)
}

pub fn is_special_zone(facility: &Facility, normalized_location: &str) -> bool {
    matched_zone(facility, normalized_location).is_some()
}
