// src/repositories/record_store.rs
//
// Key/value record persistence - the single storage seam of the app.
//
// CONTRACT:
// - get() of a missing key is Ok(None), never an error
// - set() overwrites unconditionally
// - remove() of a missing key is a no-op
// - list_keys_with_prefix() order is unspecified
// - get_many() omits absent keys
// - set_many() writes all entries or none
// - any backend failure surfaces as a storage-failure AppError

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait RecordStore: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn set_many(&self, entries: &[(String, String)]) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
    fn list_keys_with_prefix(&self, prefix: &str) -> AppResult<HashSet<String>>;
    fn get_many(&self, keys: &[String]) -> AppResult<HashMap<String, String>>;
}

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: RwLock<HashMap<String, String>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> AppError {
        AppError::Storage("record store lock poisoned".to_string())
    }
}

impl RecordStore for MemoryRecordStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let records = self.records.read().map_err(|_| Self::poisoned())?;
        Ok(records.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut records = self.records.write().map_err(|_| Self::poisoned())?;
        records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn set_many(&self, entries: &[(String, String)]) -> AppResult<()> {
        let mut records = self.records.write().map_err(|_| Self::poisoned())?;
        for (key, value) in entries {
            records.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut records = self.records.write().map_err(|_| Self::poisoned())?;
        records.remove(key);
        Ok(())
    }

    fn list_keys_with_prefix(&self, prefix: &str) -> AppResult<HashSet<String>> {
        let records = self.records.read().map_err(|_| Self::poisoned())?;
        Ok(records
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn get_many(&self, keys: &[String]) -> AppResult<HashMap<String, String>> {
        let records = self.records.read().map_err(|_| Self::poisoned())?;
        Ok(keys
            .iter()
            .filter_map(|key| records.get(key).map(|value| (key.clone(), value.clone())))
            .collect())
    }
}
