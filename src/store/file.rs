//! File-backed key-value store.
//!
//! One file per key under a root directory. Writes replace the whole file;
//! there is no locking, so concurrent processes sharing a root race
//! last-writer-wins. Good enough for a local mock store, not for production.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;

use super::KeyValueStore;

/// Key-value store persisting each key as `<root>/<key>.json`
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `root` (created lazily on first write)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory this store writes under
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read store entry: {}", path.display()))?;

        Ok(Some(content))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("Failed to create store directory: {}", self.root.display()))?;

        let path = self.path_for(key);
        fs::write(&path, value)
            .await
            .with_context(|| format!("Failed to write store entry: {}", path.display()))?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);

        if !path.exists() {
            return Ok(());
        }

        fs::remove_file(&path)
            .await
            .with_context(|| format!("Failed to remove store entry: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_set_get_delete() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("store"));

        assert_eq!(store.get("usersDB").await.unwrap(), None);

        store.set("usersDB", "[]").await.unwrap();
        assert_eq!(store.get("usersDB").await.unwrap(), Some("[]".to_string()));

        store.set("usersDB", "[1]").await.unwrap();
        assert_eq!(store.get("usersDB").await.unwrap(), Some("[1]".to_string()));

        store.delete("usersDB").await.unwrap();
        assert_eq!(store.get("usersDB").await.unwrap(), None);

        // Deleting again is fine
        store.delete("usersDB").await.unwrap();
    }

    #[tokio::test]
    async fn test_keys_map_to_files() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path());

        store.set("currentUser", "{}").await.unwrap();
        assert!(temp.path().join("currentUser.json").exists());
    }
}
