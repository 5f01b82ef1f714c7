use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

use crate::{Key, KeyValueStore};

pub static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

const MAX_ENTRIES: usize = 100;

pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if a logger has already been initialized.
pub fn init(
    repository: Arc<Mutex<dyn Repository>>,
    level: LevelFilter,
) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(repository);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let Some(repository) = LOG.lock().ok().and_then(|log| log.clone()) else {
            return;
        };
        let entry = Entry {
            time: Local::now().format("%b %d %H:%M:%S").to_string(),
            level: record.level(),
            message: record.args().to_string(),
        };
        eprintln!("{} {} {}", entry.time, entry.level, entry.message);

        if let Err(err) = persist(&repository, entry) {
            eprintln!("failed to persist log entry: {err}");
        }
    }

    fn flush(&self) {}
}

fn persist(repository: &Mutex<dyn Repository>, entry: Entry) -> Result<(), Error> {
    repository
        .lock()
        .map_err(|err| Error::Unknown(err.to_string()))?
        .write_entry(entry)
}

/// Log kept in a key-value store, most recent entry first.
pub struct StoreLog<S> {
    store: S,
}

impl<S: KeyValueStore> StoreLog<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore + Send + Sync + 'static> Repository for StoreLog<S> {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
        match self.store.load(Key::Log.as_ref()) {
            Ok(Some(value)) => serde_json::from_str(&value).map_err(|err| err.to_string()),
            Ok(None) => Ok(VecDeque::new()),
            Err(err) => Err(err.to_string()),
        }
        .map_err(Error::Unknown)
    }

    fn write_entry(&self, entry: Entry) -> Result<(), Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(MAX_ENTRIES);
        serde_json::to_string(&entries)
            .map_err(|err| err.to_string())
            .and_then(|value| {
                self.store
                    .save(Key::Log.as_ref(), &value)
                    .map_err(|err| err.to_string())
            })
            .map_err(Error::Unknown)
    }
}
