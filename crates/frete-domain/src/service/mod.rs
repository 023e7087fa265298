//! Domain services
//!
//! Everything here is a pure function of its inputs.

pub mod date_normalizer;
pub mod driver_directory;
pub mod rate_resolver;
pub mod region_matcher;
pub mod text_normalizer;
pub mod vehicle_classifier;

pub use date_normalizer::normalize_date;
pub use driver_directory::{normalize_plate, placeholder_driver_name, DriverDirectory};
pub use rate_resolver::{quote, resolve_rate, resolve_rate_for_class, RateQuote};
pub use region_matcher::{is_special_zone, matched_zone};
pub use text_normalizer::normalize_text;
pub use vehicle_classifier::{classify, classify_vehicle};
