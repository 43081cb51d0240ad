//! In-process store, used by tests and short-lived hosts.

use std::collections::BTreeMap;

use crate::StoreResult;
use crate::store::KeyValueStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    committed: BTreeMap<String, String>,
    staged: BTreeMap<String, String>,
    commits: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with committed entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            committed: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Self::default()
        }
    }

    /// Number of successful commits.
    pub fn commit_count(&self) -> usize {
        self.commits
    }

    pub fn has_pending(&self) -> bool {
        !self.staged.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.committed.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: String) -> StoreResult<()> {
        self.staged.insert(key.to_string(), value);
        Ok(())
    }

    fn commit(&mut self) -> StoreResult<()> {
        self.committed.append(&mut self.staged);
        self.commits += 1;
        Ok(())
    }
}
