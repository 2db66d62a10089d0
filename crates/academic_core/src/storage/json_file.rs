//! JSON file gateway.
//!
//! # Invariants
//! - A missing file is equivalent to an empty state.
//! - Unreadable or unparsable files fall back to an empty state.
//! - Writes replace the whole file; no atomic rename is attempted.

use super::{decode_or_empty, encode_state, StateGateway, StorageError, StorageResult};
use crate::repo::record_store::RecordStore;
use log::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Gateway persisting state as pretty-printed JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileGateway {
    path: PathBuf,
}

impl JsonFileGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateGateway for JsonFileGateway {
    fn load(&self) -> RecordStore {
        if !self.path.exists() {
            info!("event=state_load module=storage status=ok source=file detail=missing_file");
            return RecordStore::new();
        }

        match fs::read_to_string(&self.path) {
            Ok(text) => decode_or_empty(&text, "file"),
            Err(err) => {
                warn!(
                    "event=state_load module=storage status=fallback source=file error_code=read_failed error={}",
                    err
                );
                RecordStore::new()
            }
        }
    }

    fn save(&self, store: &RecordStore) -> StorageResult<()> {
        let started_at = Instant::now();
        let result = encode_state(store)
            .and_then(|text| fs::write(&self.path, text).map_err(StorageError::from));
        match &result {
            Ok(()) => info!(
                "event=state_save module=storage status=ok duration_ms={} courses={} assignments={}",
                started_at.elapsed().as_millis(),
                store.courses().len(),
                store.assignments().len()
            ),
            Err(err) => error!(
                "event=state_save module=storage status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }
}
