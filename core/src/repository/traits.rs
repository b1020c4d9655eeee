use crate::model::store::AttendanceStore;
use anyhow::Result;

/// Single key-value slot holding the whole attendance store.
pub trait StoreRepository {
    /// Unreadable or missing data loads as an empty store.
    fn load(&self) -> AttendanceStore;
    fn save(&self, store: &AttendanceStore) -> Result<()>;
}
