//! Key-value store contract.

use crate::StoreResult;

/// A string-keyed store with staged writes.
///
/// `put` stages a value; it becomes visible to `get` and durable only after
/// `commit` succeeds.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn put(&mut self, key: &str, value: String) -> StoreResult<()>;
    fn commit(&mut self) -> StoreResult<()>;
}
