//! Persistence port for the visitor's locale choice.
//!
//! Exactly one key-value pair is persisted: the locale code as plain text.
//! The file-backed implementation stands in for client-local storage; an
//! in-memory implementation exists for tests.

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Storage port for the persisted locale code.
///
/// Implementations only deal in raw code strings; validation against the
/// supported set happens in the locale store, so a stale or corrupted
/// persisted value is recovered there, not here.
pub trait LocaleStorage: Send + Sync {
    /// Load the persisted locale code, if any.
    fn load(&self) -> Result<Option<String>>;

    /// Persist the locale code for future sessions.
    fn save(&self, code: &str) -> Result<()>;
}

/// File-backed locale storage: one small text file holding the code.
pub struct FileLocaleStorage {
    path: PathBuf,
}

impl FileLocaleStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LocaleStorage for FileLocaleStorage {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read locale file at {}", self.path.display()))?;

        let code = raw.trim();
        if code.is_empty() {
            return Ok(None);
        }

        Ok(Some(code.to_string()))
    }

    fn save(&self, code: &str) -> Result<()> {
        fs::write(&self.path, code)
            .with_context(|| format!("Failed to write locale file at {}", self.path.display()))
    }
}

/// In-memory locale storage for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryLocaleStorage {
    value: Mutex<Option<String>>,
}

impl MemoryLocaleStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the stored value, as if left over from a previous session.
    pub fn with_value(code: &str) -> Self {
        Self {
            value: Mutex::new(Some(code.to_string())),
        }
    }
}

impl LocaleStorage for MemoryLocaleStorage {
    fn load(&self) -> Result<Option<String>> {
        let value = self
            .value
            .lock()
            .map_err(|_| anyhow!("Locale storage lock poisoned"))?;
        Ok(value.clone())
    }

    fn save(&self, code: &str) -> Result<()> {
        let mut value = self
            .value
            .lock()
            .map_err(|_| anyhow!("Locale storage lock poisoned"))?;
        *value = Some(code.to_string());
        Ok(())
    }
}
