use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use uuid::Uuid;

use crate::entity::Receipt;

/// In-memory receipt store keyed by generated id.
///
/// Entries are never updated or removed, so they live as long as the store.
/// The lock is only held for a single insert or lookup.
#[derive(Debug, Default)]
pub struct ReceiptStore {
    receipts: RwLock<HashMap<String, Receipt>>,
}

impl ReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a receipt under a fresh UUIDv4 and return the id
    pub fn put(&self, receipt: Receipt) -> String {
        let id = Uuid::new_v4().to_string();

        // Entries are immutable once written, so a poisoned map is still consistent
        self.receipts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone(), receipt);

        tracing::debug!("Stored receipt {}", id);
        id
    }

    /// Find a receipt by id
    pub fn get(&self, id: &str) -> Option<Receipt> {
        self.receipts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.receipts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
