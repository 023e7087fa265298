//! Infrastructure layer - CSV import, roster loading, persistence, export

pub mod csv_export;
pub mod freight_csv;
pub mod persistence;
pub mod roster_loader;
pub mod text_decoder;

pub use freight_csv::{import_batch, import_batch_with, parse_row};
