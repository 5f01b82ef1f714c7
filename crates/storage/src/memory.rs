use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use crate::{KeyValueError, KeyValueStore};

/// Key-value store kept in memory for the lifetime of the process.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, KeyValueError> {
        self.entries
            .lock()
            .map_err(|err| KeyValueError::Unavailable(err.to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), KeyValueError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), KeyValueError> {
        self.entries()?.remove(key);
        Ok(())
    }
}
