//! Use cases: manual entry, CSV import, list queries and dashboard

pub mod query;
pub mod record_service;

pub use query::{compute_stats, filter_and_sort, DashboardStats, DateRange, RecordQuery};
pub use record_service::{ManualEntry, RecordService};
