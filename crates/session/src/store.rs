//! Persistence for the session token.
//!
//! A store holds one string value under a fixed key, mirroring per-origin
//! local storage. Browser builds use `window.localStorage`; native builds use
//! a small JSON key/value file; tests use memory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage contents are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Read/write access to the persisted token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// In-process store. Used by tests and as a fallback when no persistent
/// storage can be opened.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, StorageError> {
        self.token
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot()?.clone())
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.slot()? = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot()? = None;
        Ok(())
    }
}

/// Key/value JSON file standing in for local storage on native targets.
///
/// Other keys in the file are preserved on write.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
    key: String,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(&self.key))
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        let mut entries = self.read_all().unwrap_or_else(|e| {
            tracing::warn!(error = %e, path = %self.path.display(), "Discarding unreadable storage file");
            BTreeMap::new()
        });
        entries.insert(self.key.clone(), token.to_string());
        self.write_all(&entries)
    }

    fn clear(&self) -> Result<(), StorageError> {
        match self.read_all() {
            Ok(mut entries) => {
                if entries.remove(&self.key).is_some() {
                    self.write_all(&entries)?;
                }
                Ok(())
            }
            // Nothing trustworthy to keep; start over without the token.
            Err(StorageError::Corrupt(_)) => self.write_all(&BTreeMap::new()),
            Err(e) => Err(e),
        }
    }
}

/// `window.localStorage` under a fixed key.
#[cfg(feature = "web")]
#[derive(Debug, Clone)]
pub struct BrowserTokenStore {
    key: String,
}

#[cfg(feature = "web")]
impl BrowserTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

#[cfg(feature = "web")]
impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(&self.key, token)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(&self.key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }
}
