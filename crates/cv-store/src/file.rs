//! Store persisted as a single JSON object file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::KeyValueStore;
use crate::{StoreError, StoreResult};

/// File-backed store.
///
/// The whole map is loaded on `open` and rewritten on `commit` through a
/// sibling temp file, so a failed commit never leaves a half-written file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    committed: BTreeMap<String, String>,
    staged: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        if path.file_name().is_none() {
            return Err(StoreError::InvalidPath {
                message: format!("{} does not name a file", path.display()),
            });
        }

        let committed = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), entries = committed.len(), "opened file store");

        Ok(Self {
            path,
            committed,
            staged: BTreeMap::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.committed.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: String) -> StoreResult<()> {
        self.staged.insert(key.to_string(), value);
        Ok(())
    }

    fn commit(&mut self) -> StoreResult<()> {
        let mut next = self.committed.clone();
        next.extend(self.staged.iter().map(|(k, v)| (k.clone(), v.clone())));

        let content = serde_json::to_string_pretty(&next)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, content)?;
        if let Err(err) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }

        self.committed = next;
        self.staged.clear();
        tracing::debug!(path = %self.path.display(), "committed file store");
        Ok(())
    }
}
