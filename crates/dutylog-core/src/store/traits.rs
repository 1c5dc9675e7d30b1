//! Key-value boundary the collection store persists through.

use crate::error::Result;

/// Blob storage keyed by name.
///
/// Implementations hold serialized blobs only; parsing belongs to the callers.
/// `get` returns `Ok(None)` for a key that was never written.
pub trait KeyValueStore: Send + Sync {
    /// Read the blob stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
