#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::sync::Arc;

#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod log;
pub mod memory;
mod record;

/// Device key-value store holding serialized values.
pub trait KeyValueStore {
    fn load(&self, key: &str) -> Result<Option<String>, KeyValueError>;
    fn save(&self, key: &str, value: &str) -> Result<(), KeyValueError>;
    fn remove(&self, key: &str) -> Result<(), KeyValueError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn load(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), KeyValueError> {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), KeyValueError> {
        (**self).remove(key)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum KeyValueError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(strum::AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    #[strum(serialize = "templates")]
    Templates,
    #[strum(serialize = "workouts")]
    Workouts,
    #[strum(serialize = "log")]
    Log,
}
