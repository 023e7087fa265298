//! Export module for spreadsheet output

pub mod excel;

pub use excel::export_to_excel;
pub use frete_infra::csv_export::export_to_csv;
