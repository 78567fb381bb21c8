//! Best-effort preference storage
//!
//! Preferences are a cache, not a source of truth: reads that fail to parse
//! come back as `None`, and writes that fail are dropped. A write rejected
//! for exceeding the storage quota clears the key instead, so a stale value
//! is never left behind.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage quota exceeded: {required} bytes needed, {quota} allowed")]
    QuotaExceeded { required: usize, quota: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Raw string storage behind [`Preferences`]
pub trait PreferenceBackend {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String) -> StorageResult<()>;

    fn remove(&mut self, key: &str) -> StorageResult<()>;

    fn keys(&self) -> Vec<String>;
}

fn stored_size<'a>(entries: impl Iterator<Item = (&'a String, &'a String)>) -> usize {
    entries.map(|(key, value)| key.len() + value.len()).sum()
}

/// In-memory storage with an optional byte quota over keys and values
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    pub fn used_bytes(&self) -> usize {
        stored_size(self.entries.iter())
    }
}

impl PreferenceBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> StorageResult<()> {
        if let Some(quota) = self.quota_bytes {
            let others = stored_size(self.entries.iter().filter(|(k, _)| k.as_str() != key));
            let required = others + key.len() + value.len();
            if required > quota {
                return Err(StorageError::QuotaExceeded { required, quota });
            }
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        keys
    }
}

/// Storage persisted as a single JSON object on disk
///
/// The whole document is rewritten on every change. The quota applies to the
/// serialized document size.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    quota_bytes: Option<usize>,
}

impl FileBackend {
    /// Open the document at `path`; a missing or unreadable document starts empty
    pub fn open(path: impl Into<PathBuf>, quota_bytes: Option<usize>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), "Failed to parse preferences, starting fresh: {}", e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), "Failed to read preferences, starting fresh: {}", e);
                BTreeMap::new()
            }
        };
        Self {
            path,
            entries,
            quota_bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `entries` as the whole document
    ///
    /// The quota is only checked when `enforce_quota` is set; a removal never
    /// grows the document, so it must go through even over quota.
    fn persist(&self, entries: &BTreeMap<String, String>, enforce_quota: bool) -> StorageResult<()> {
        let content = serde_json::to_string_pretty(entries)?;
        if let Some(quota) = self.quota_bytes.filter(|_| enforce_quota) {
            if content.len() > quota {
                return Err(StorageError::QuotaExceeded {
                    required: content.len(),
                    quota,
                });
            }
        }
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> StorageResult<()> {
        let mut updated = self.entries.clone();
        updated.insert(key.to_string(), value);
        self.persist(&updated, true)?;
        self.entries = updated;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut updated = self.entries.clone();
        updated.remove(key);
        self.persist(&updated, false)?;
        self.entries = updated;
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

/// Typed, JSON-encoded preferences over a [`PreferenceBackend`]
#[derive(Debug)]
pub struct Preferences<B: PreferenceBackend> {
    backend: B,
}

impl<B: PreferenceBackend> Preferences<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read a preference; missing or unparsable values yield `None`
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring unparsable preference");
                None
            }
        }
    }

    /// Store a preference, best effort
    ///
    /// On quota exhaustion the key is cleared; any other failure is logged
    /// and the write dropped. Nothing is retried.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(key, error = %e, "failed to encode preference");
                return;
            }
        };

        match self.backend.set(key, raw) {
            Ok(()) => {}
            Err(StorageError::QuotaExceeded { required, quota }) => {
                tracing::debug!(key, required, quota, "preference quota exceeded, clearing key");
                if let Err(e) = self.backend.remove(key) {
                    tracing::debug!(key, error = %e, "failed to clear preference");
                }
            }
            Err(e) => {
                tracing::error!(key, error = %e, "failed to store preference");
            }
        }
    }

    pub fn remove(&mut self, key: &str) {
        if let Err(e) = self.backend.remove(key) {
            tracing::error!(key, error = %e, "failed to remove preference");
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.backend.keys()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
