//! Storage port for the overlay document and its adapters

use crate::error::{CityNavError, Result};
use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Raw byte storage for the overlay document.
pub trait OverlayBackend {
    /// Load the stored document. `Ok(None)` when nothing has been stored yet.
    fn load_raw(&self) -> Result<Option<Vec<u8>>>;
    /// Replace the stored document.
    fn save_raw(&self, data: &[u8]) -> Result<()>;
    /// Human-readable location for diagnostics.
    fn describe(&self) -> String;
}

/// Overlay stored as a single JSON file.
///
/// No locking: two processes writing the same file race, last write wins.
#[derive(Debug, Clone)]
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OverlayBackend for FsBackend {
    fn load_raw(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(CityNavError::Io(err)),
        }
    }

    fn save_raw(&self, data: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| CityNavError::persist(self.describe(), e))?;
        }
        fs::write(&self.path, data).map_err(|e| CityNavError::persist(self.describe(), e))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Overlay kept in memory; clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    data: Rc<RefCell<Option<Vec<u8>>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with a stored document
    pub fn with_contents(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Rc::new(RefCell::new(Some(data.into()))),
        }
    }

    /// Snapshot of the stored bytes
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.data.borrow().clone()
    }
}

impl OverlayBackend for MemoryBackend {
    fn load_raw(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.data.borrow().clone())
    }

    fn save_raw(&self, data: &[u8]) -> Result<()> {
        *self.data.borrow_mut() = Some(data.to_vec());
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
