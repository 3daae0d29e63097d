use crate::domain::Viewport;
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Key the last-used search area is kept under.
pub const VIEWPORT_KEY: &str = "map_viewport";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("bad stored data: {0}")]
    Format(#[from] serde_json::Error),
}

/// Durable client-side storage for the search area.
pub trait ViewportStore {
    fn load(&self) -> Result<Option<Viewport>, StoreError>;

    fn save(&self, viewport: &Viewport) -> Result<(), StoreError>;
}

/// String key/value pairs in a JSON file, one entry per key.
pub struct FileViewportStore {
    path: PathBuf,
}

impl FileViewportStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_entries(&self) -> Result<Map<String, Value>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl ViewportStore for FileViewportStore {
    fn load(&self) -> Result<Option<Viewport>, StoreError> {
        let entries = self.read_entries()?;
        match entries.get(VIEWPORT_KEY).and_then(Value::as_str) {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, viewport: &Viewport) -> Result<(), StoreError> {
        // Other keys in the file are left alone.
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(
            VIEWPORT_KEY.to_string(),
            Value::String(serde_json::to_string(viewport)?),
        );
        fs::write(&self.path, serde_json::to_vec_pretty(&entries)?)?;
        Ok(())
    }
}

/// Keeps the serialized viewport in memory, same format as the file store.
#[derive(Default)]
pub struct MemoryViewportStore {
    entries: RefCell<HashMap<String, String>>,
}

impl ViewportStore for MemoryViewportStore {
    fn load(&self) -> Result<Option<Viewport>, StoreError> {
        match self.entries.borrow().get(VIEWPORT_KEY) {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, viewport: &Viewport) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(VIEWPORT_KEY.to_string(), serde_json::to_string(viewport)?);
        Ok(())
    }
}
