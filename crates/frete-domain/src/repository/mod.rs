//! Repository trait definitions for data persistence

use frete_types::{Result, StoredFreight};
use uuid::Uuid;

/// Persisted list of freight records, newest first
pub trait FreightRepository {
    /// All records in storage order
    fn find_all(&self) -> Result<Vec<StoredFreight>>;

    /// Insert records at the front, keeping their relative order
    fn prepend(&self, records: Vec<StoredFreight>) -> Result<()>;

    /// Remove a record; `false` when the id was not stored
    fn delete(&self, id: Uuid) -> Result<bool>;
}
