//! In-memory gateway holding the serialized state.
//!
//! Goes through the same encode/decode path as the file gateway, so it is a
//! faithful stand-in for tests and dry runs.

use super::{decode_or_empty, encode_state, StateGateway, StorageResult};
use crate::repo::record_store::RecordStore;
use std::cell::{Cell, RefCell};

#[derive(Debug, Default)]
pub struct MemoryGateway {
    content: RefCell<Option<String>>,
    saves: Cell<usize>,
}

impl MemoryGateway {
    /// Creates a gateway with no persisted state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway whose persisted content is `text`, valid or not.
    pub fn with_content(text: impl Into<String>) -> Self {
        Self {
            content: RefCell::new(Some(text.into())),
            saves: Cell::new(0),
        }
    }

    /// Last persisted text, if any.
    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StateGateway for MemoryGateway {
    fn load(&self) -> RecordStore {
        match self.content.borrow().as_deref() {
            Some(text) => decode_or_empty(text, "memory"),
            None => RecordStore::new(),
        }
    }

    fn save(&self, store: &RecordStore) -> StorageResult<()> {
        let text = encode_state(store)?;
        *self.content.borrow_mut() = Some(text);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
