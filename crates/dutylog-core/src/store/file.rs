//! Directory-backed key-value store: one `<key>.json` file per blob.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::traits::KeyValueStore;
use crate::error::{DutyLogError, Result};
use crate::fs::write_atomic;

#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Use `dir` for blobs. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(DutyLogError::InvalidInput(format!(
                "Invalid storage key \"{}\"",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!(key, path = %path.display(), bytes = contents.len(), "read blob");
                Ok(Some(contents))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(DutyLogError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        write_atomic(&path, value.as_bytes()).map_err(|err| {
            DutyLogError::Storage(format!("Failed to write {}: {}", path.display(), err))
        })?;
        debug!(key, path = %path.display(), bytes = value.len(), "wrote blob");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_key_reads_as_none() {
        let temp = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp.path().join("data"));
        assert_eq!(store.get("alp_duties").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let temp = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp.path().join("data"));
        store.set("alp_profile", "{\"name\":\"A\"}").unwrap();
        assert_eq!(
            store.get("alp_profile").unwrap().as_deref(),
            Some("{\"name\":\"A\"}")
        );
        assert!(temp.path().join("data/alp_profile.json").exists());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp.path());
        assert!(store.get("../etc/passwd").is_err());
        assert!(store.set("", "x").is_err());
    }
}
