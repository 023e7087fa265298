//! Single entry point for pricing a delivery run

use frete_types::{Facility, VehicleClass};

use super::{classify, matched_zone, normalize_text};
use crate::model::TariffTable;

/// Breakdown of a resolved rate
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuote {
    pub vehicle_class: VehicleClass,
    /// Premium zone name when the destination is special
    pub zone: Option<&'static str>,
    pub price: f64,
}

/// Price a run from raw vehicle text and destination
///
/// Never fails: an unknown facility or unclassifiable vehicle yields 0.
pub fn resolve_rate(
    facility: &Facility,
    vehicle_text: &str,
    count: i64,
    city: &str,
    region: &str,
) -> f64 {
    quote(facility, vehicle_text, count, city, region).price
}

/// Price a run whose vehicle class is already known
pub fn resolve_rate_for_class(
    facility: &Facility,
    vehicle_class: VehicleClass,
    count: i64,
    city: &str,
    region: &str,
) -> f64 {
    quote_for_class(facility, vehicle_class, count, city, region).price
}

pub fn quote(
    facility: &Facility,
    vehicle_text: &str,
    count: i64,
    city: &str,
    region: &str,
) -> RateQuote {
    let vehicle_class = classify(&normalize_text(vehicle_text));
    quote_for_class(facility, vehicle_class, count, city, region)
}

fn quote_for_class(
    facility: &Facility,
    vehicle_class: VehicleClass,
    count: i64,
    city: &str,
    region: &str,
) -> RateQuote {
    let location = normalize_text(&format!("{} {}", city, region));
    let zone = matched_zone(facility, &location);
    let price = TariffTable::standard().price(facility, zone.is_some(), vehicle_class, count);

    RateQuote {
        vehicle_class,
        zone,
        price,
    }
}
