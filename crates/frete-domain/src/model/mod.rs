//! Domain model types

pub mod cdd;
pub mod driver;
pub mod tariff;

pub use cdd::Cdd;
pub use driver::DriverEntry;
pub use tariff::{Breakpoints, TariffRule, TariffTable, Tier, Zone};
