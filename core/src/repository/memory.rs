use std::cell::RefCell;

use anyhow::{anyhow, Result};

use crate::model::store::AttendanceStore;
use crate::repository::traits::StoreRepository;

/// Keeps the slot in memory. Used when no data directory is wanted and in tests.
#[derive(Default)]
pub struct MemoryStoreRepository {
    slot: RefCell<Option<AttendanceStore>>,
    fail_writes: bool,
}

impl MemoryStoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: AttendanceStore) -> Self {
        Self { slot: RefCell::new(Some(store)), fail_writes: false }
    }

    /// A repository whose writes always fail.
    pub fn failing() -> Self {
        Self { slot: RefCell::new(None), fail_writes: true }
    }

    pub fn saved(&self) -> Option<AttendanceStore> {
        self.slot.borrow().clone()
    }
}

impl StoreRepository for MemoryStoreRepository {
    fn load(&self) -> AttendanceStore {
        self.slot.borrow().clone().unwrap_or_default()
    }

    fn save(&self, store: &AttendanceStore) -> Result<()> {
        if self.fail_writes {
            return Err(anyhow!("storage unavailable"));
        }
        *self.slot.borrow_mut() = Some(store.clone());
        Ok(())
    }
}
