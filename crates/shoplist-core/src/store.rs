//! Durable storage for the item collection
//!
//! Every save rewrites the whole collection. There is no incremental log.

use parking_lot::Mutex;
use std::fmt;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::model::{validate_collection, Item};

/// Persistence boundary for the collection
pub trait Store: Send + Sync + fmt::Debug {
    /// Read the persisted collection. A store that was never written yields
    /// an empty collection.
    fn load(&self) -> Result<Vec<Item>, StoreError>;

    /// Replace the persisted collection with `items`
    fn save(&self, items: &[Item]) -> Result<(), StoreError>;
}

/// Collection stored as a JSON array in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File holding the collection
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn corrupt(&self, reason: impl ToString) -> StoreError {
        StoreError::Corrupt {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    fn write_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> Result<Vec<Item>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No data file at {:?}, starting empty", self.path);
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.corrupt(e)),
        };

        let items: Vec<Item> = serde_json::from_str(&content).map_err(|e| self.corrupt(e))?;
        validate_collection(&items).map_err(|e| self.corrupt(e))?;

        tracing::debug!("Loaded {} items from {:?}", items.len(), self.path);
        Ok(items)
    }

    fn save(&self, items: &[Item]) -> Result<(), StoreError> {
        // Never write a file that load would refuse
        validate_collection(items)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }

        let json = serde_json::to_vec(items)?;

        // Write beside the target then rename so readers never see a partial file
        let temp_path = self.temp_path();
        let mut file = File::create(&temp_path).map_err(|e| self.write_error(e))?;
        file.write_all(&json).map_err(|e| self.write_error(e))?;
        file.sync_all().map_err(|e| self.write_error(e))?;
        drop(file);

        fs::rename(&temp_path, &self.path).map_err(|e| self.write_error(e))?;

        tracing::debug!("Saved {} items to {:?}", items.len(), self.path);
        Ok(())
    }
}

/// In-process store for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    items: Vec<Item>,
    saves: usize,
    fail_saves: bool,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `items`
    pub fn with_items(items: Vec<Item>) -> Self {
        let store = Self::default();
        store.inner.lock().items = items;
        store
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.inner.lock().saves
    }

    /// Copy of the last saved collection
    pub fn snapshot(&self) -> Vec<Item> {
        self.inner.lock().items.clone()
    }

    /// Make subsequent saves fail with an IO error
    pub fn fail_saves(&self, fail: bool) {
        self.inner.lock().fail_saves = fail;
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Vec<Item>, StoreError> {
        let items = self.inner.lock().items.clone();
        validate_collection(&items)?;
        Ok(items)
    }

    fn save(&self, items: &[Item]) -> Result<(), StoreError> {
        let mut state = self.inner.lock();
        if state.fail_saves {
            return Err(StoreError::Io(std::io::Error::new(
                ErrorKind::Other,
                "simulated write failure",
            )));
        }
        state.items = items.to_vec();
        state.saves += 1;
        Ok(())
    }
}
