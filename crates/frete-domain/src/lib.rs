//! Rate resolution engine for CDD freight payouts
//!
//! Pure, synchronous functions: text normalization, vehicle and zone
//! classification, the negotiated tariff table, and the driver directory.

pub mod model;
pub mod repository;
pub mod service;

pub use model::*;
pub use repository::FreightRepository;
pub use service::{
    classify_vehicle, is_special_zone, normalize_date, normalize_plate, normalize_text,
    placeholder_driver_name, quote, resolve_rate, resolve_rate_for_class, DriverDirectory,
    RateQuote,
};
