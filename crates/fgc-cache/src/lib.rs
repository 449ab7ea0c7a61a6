#![deny(missing_docs)]

//! JSON-file-backed implementation of the
//! [`UlongListCache`](fgc_core::UlongListCache) memoization contract.
//!
//! The store is an explicitly injected collaborator with an explicit
//! load/save lifecycle — there is no process-wide implicit cache. `set`
//! writes through to disk eagerly; a failed write leaves the store dirty so
//! an explicit [`save`](JsonUlongCache::save) can surface the error.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use fgc_core::errors::{ErrorInfo, FgcError};
use fgc_core::UlongListCache;

/// Persistent key to integer-sequence store serialized as pretty JSON.
#[derive(Debug, Clone)]
pub struct JsonUlongCache {
    path: PathBuf,
    entries: BTreeMap<String, Vec<u64>>,
    dirty: bool,
}

fn cache_error(code: &str, err: impl ToString) -> FgcError {
    FgcError::Cache(ErrorInfo::new(code, err.to_string()))
}

impl JsonUlongCache {
    /// Opens the store at `path`; a missing file is an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, FgcError> {
        let path = path.into();
        let entries = if path.exists() {
            let text = fs::read_to_string(&path).map_err(|err| cache_error("cache-read", err))?;
            serde_json::from_str(&text).map_err(|err| cache_error("cache-parse", err))?
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path,
            entries,
            dirty: false,
        })
    }

    /// Persists the current contents.
    pub fn save(&mut self) -> Result<(), FgcError> {
        let text = serde_json::to_string_pretty(&self.entries)
            .map_err(|err| cache_error("cache-serialize", err))?;
        fs::write(&self.path, text).map_err(|err| cache_error("cache-write", err))?;
        self.dirty = false;
        Ok(())
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored sequences.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when an eager write failed and the contents are newer than the
    /// file.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl UlongListCache for JsonUlongCache {
    fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<Vec<u64>> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &[u64]) {
        if self.entries.get(key).map(Vec::as_slice) == Some(value) {
            return;
        }
        self.entries.insert(key.to_string(), value.to_vec());
        self.dirty = true;
        let _ = self.save();
    }
}
