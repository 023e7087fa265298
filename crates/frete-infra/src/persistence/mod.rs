//! Persistence implementations
//!
//! File-based implementations of the repository traits.

mod file_freight_repo;

pub use file_freight_repo::{FileFreightRepository, STORAGE_FILE};
