//! Negotiated freight tariff
//!
//! Prices are keyed by (facility, zone, vehicle class) and step on the
//! number of deliveries in the run. Every threshold is inclusive on the
//! low side: `count <= threshold` takes that tier's price.

use frete_types::{Facility, VehicleClass};

use super::Cdd;

/// Destination zone relative to a facility's contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Standard,
    /// Negotiated premium region (Esmeraldas, Pedro Leopoldo, ...)
    Special,
}

impl Zone {
    pub fn from_flag(special: bool) -> Self {
        if special {
            Zone::Special
        } else {
            Zone::Standard
        }
    }
}

/// Price applying up to and including `up_to` deliveries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub up_to: i64,
    pub price: f64,
}

/// Delivery-count breakpoints for one rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    pub low: Tier,
    pub mid: Option<Tier>,
    /// Price once the count passes every tier
    pub above: f64,
}

impl Breakpoints {
    pub fn price_for(&self, count: i64) -> f64 {
        if count <= self.low.up_to {
            return self.low.price;
        }
        match self.mid {
            Some(mid) if count <= mid.up_to => mid.price,
            _ => self.above,
        }
    }

    pub fn threshold(&self) -> i64 {
        self.low.up_to
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TariffRule {
    pub cdd: Cdd,
    pub zone: Zone,
    pub class: VehicleClass,
    pub breakpoints: Breakpoints,
}

const fn rule(cdd: Cdd, zone: Zone, class: VehicleClass, breakpoints: Breakpoints) -> TariffRule {
    TariffRule {
        cdd,
        zone,
        class,
        breakpoints,
    }
}

const fn two_tier(threshold: i64, low: f64, high: f64) -> Breakpoints {
    Breakpoints {
        low: Tier {
            up_to: threshold,
            price: low,
        },
        mid: None,
        above: high,
    }
}

/// Contract rules for both facilities
pub const TARIFF_RULES: &[TariffRule] = &[
    // Contagem
    rule(Cdd::Contagem, Zone::Standard, VehicleClass::Vuc, two_tier(20, 750.0, 820.0)),
    rule(Cdd::Contagem, Zone::Standard, VehicleClass::Toco, two_tier(15, 900.0, 960.0)),
    rule(Cdd::Contagem, Zone::Standard, VehicleClass::Truck, two_tier(10, 1000.0, 1070.0)),
    rule(Cdd::Contagem, Zone::Special, VehicleClass::Vuc, two_tier(20, 810.0, 900.0)),
    rule(Cdd::Contagem, Zone::Special, VehicleClass::Toco, two_tier(15, 1000.0, 1060.0)),
    rule(Cdd::Contagem, Zone::Special, VehicleClass::Truck, two_tier(10, 1100.0, 1170.0)),
    // Santa Luzia
    rule(Cdd::SantaLuzia, Zone::Standard, VehicleClass::Vuc, two_tier(20, 750.0, 820.0)),
    rule(Cdd::SantaLuzia, Zone::Standard, VehicleClass::Toco, two_tier(15, 900.0, 960.0)),
    rule(Cdd::SantaLuzia, Zone::Standard, VehicleClass::Truck, two_tier(10, 1000.0, 1070.0)),
    // No negotiated price for 16-20 deliveries: the band falls back to the
    // low tier until the contract says otherwise.
    rule(
        Cdd::SantaLuzia,
        Zone::Special,
        VehicleClass::Vuc,
        Breakpoints {
            low: Tier {
                up_to: 15,
                price: 750.0,
            },
            mid: Some(Tier {
                up_to: 20,
                price: 750.0,
            }),
            above: 800.0,
        },
    ),
    rule(Cdd::SantaLuzia, Zone::Special, VehicleClass::Toco, two_tier(15, 950.0, 1025.0)),
    rule(Cdd::SantaLuzia, Zone::Special, VehicleClass::Truck, two_tier(10, 1050.0, 1125.0)),
];

/// Read-only view over a rule list
#[derive(Debug, Clone, Copy)]
pub struct TariffTable {
    rules: &'static [TariffRule],
}

impl TariffTable {
    /// The negotiated contract
    pub const fn standard() -> Self {
        Self {
            rules: TARIFF_RULES,
        }
    }

    pub fn rules(&self) -> &'static [TariffRule] {
        self.rules
    }

    pub fn rule(&self, cdd: Cdd, zone: Zone, class: VehicleClass) -> Option<&'static TariffRule> {
        self.rules
            .iter()
            .find(|r| r.cdd == cdd && r.zone == zone && r.class == class)
    }

    /// Price for a run, or 0 when no contractual rate applies
    pub fn price(
        &self,
        facility: &Facility,
        special: bool,
        class: VehicleClass,
        count: i64,
    ) -> f64 {
        Cdd::from_facility(facility)
            .and_then(|cdd| self.rule(cdd, Zone::from_flag(special), class))
            .map(|r| r.breakpoints.price_for(count))
            .unwrap_or(0.0)
    }
}

impl Default for TariffTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_combination_has_a_rule() {
        let table = TariffTable::standard();
        for cdd in [Cdd::SantaLuzia, Cdd::Contagem] {
            for zone in [Zone::Standard, Zone::Special] {
                for class in [VehicleClass::Vuc, VehicleClass::Toco, VehicleClass::Truck] {
                    assert!(table.rule(cdd, zone, class).is_some());
                }
                assert!(table.rule(cdd, zone, VehicleClass::Other).is_none());
            }
        }
        assert_eq!(table.rules().len(), 12);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let table = TariffTable::standard();
        let f = Facility::Contagem;
        assert_eq!(table.price(&f, false, VehicleClass::Toco, 15), 900.0);
        assert_eq!(table.price(&f, false, VehicleClass::Toco, 16), 960.0);
        assert_eq!(table.price(&f, false, VehicleClass::Truck, 10), 1000.0);
        assert_eq!(table.price(&f, false, VehicleClass::Truck, 11), 1070.0);
    }

    #[test]
    fn test_santa_luzia_special_vuc_gap_band() {
        let table = TariffTable::standard();
        let f = Facility::SantaLuzia;
        assert_eq!(table.price(&f, true, VehicleClass::Vuc, 15), 750.0);
        // 16-20 has no distinct price and stays on the low tier
        assert_eq!(table.price(&f, true, VehicleClass::Vuc, 16), 750.0);
        assert_eq!(table.price(&f, true, VehicleClass::Vuc, 20), 750.0);
        assert_eq!(table.price(&f, true, VehicleClass::Vuc, 21), 800.0);
    }

    #[test]
    fn test_unknown_facility_and_class_price_zero() {
        let table = TariffTable::standard();
        let betim = Facility::Other("Betim".to_string());
        assert_eq!(table.price(&betim, false, VehicleClass::Vuc, 5), 0.0);
        assert_eq!(
            table.price(&Facility::Contagem, true, VehicleClass::Other, 5),
            0.0
        );
    }

    #[test]
    fn test_zero_and_negative_counts_take_low_tier() {
        let table = TariffTable::standard();
        let f = Facility::SantaLuzia;
        assert_eq!(table.price(&f, false, VehicleClass::Vuc, 0), 750.0);
        assert_eq!(table.price(&f, false, VehicleClass::Vuc, -4), 750.0);
    }
}
