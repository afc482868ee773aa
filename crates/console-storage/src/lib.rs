//! Credential storage for the Campus console.
//!
//! This crate owns the durable token record: a small key-value store
//! persisted at `~/.campus/credentials.json`, with a trait seam so a
//! platform keyring backend can be slotted in later.

mod file;
mod keys;
mod traits;
mod vault;

pub use file::FileStorage;
pub use keys::StorageKeys;
pub use traits::SecureStorage;
pub use vault::{SessionMeta, TokenVault};

use console_core::Paths;
use thiserror::Error;

/// Error type for storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backend-specific storage error
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// Key not found
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Encoding/decoding error
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Create the default storage backend for the given paths.
pub fn create_storage(paths: &Paths) -> StorageResult<Box<dyn SecureStorage>> {
    let storage = FileStorage::new(paths.credentials_file())?;
    Ok(Box::new(storage))
}

/// Create a TokenVault with the default storage backend.
pub fn create_token_vault(paths: &Paths) -> StorageResult<TokenVault> {
    let storage = create_storage(paths)?;
    Ok(TokenVault::new(storage))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory storage for testing
    pub struct MemoryStorage {
        data: std::sync::Mutex<std::collections::HashMap<String, String>>,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self {
                data: std::sync::Mutex::new(std::collections::HashMap::new()),
            }
        }
    }

    impl SecureStorage for MemoryStorage {
        fn set(&self, key: &str, value: &str) -> StorageResult<()> {
            let mut data = self.data.lock().unwrap();
            data.insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            let data = self.data.lock().unwrap();
            Ok(data.get(key).cloned())
        }

        fn delete(&self, key: &str) -> StorageResult<bool> {
            let mut data = self.data.lock().unwrap();
            Ok(data.remove(key).is_some())
        }
    }

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();

        storage.set("test_key", "test_value").unwrap();
        assert_eq!(
            storage.get("test_key").unwrap(),
            Some("test_value".to_string())
        );

        assert!(storage.has("test_key").unwrap());
        assert!(!storage.has("nonexistent").unwrap());

        assert!(storage.delete("test_key").unwrap());
        assert!(!storage.delete("test_key").unwrap());
        assert_eq!(storage.get("test_key").unwrap(), None);
    }

    #[test]
    fn test_token_vault_over_memory_storage() {
        let vault = TokenVault::new(Box::new(MemoryStorage::new()));

        assert!(!vault.has_token().unwrap());
        vault.set_token("tok-123").unwrap();
        assert!(vault.has_token().unwrap());
        assert_eq!(vault.get_token().unwrap(), Some("tok-123".to_string()));

        vault.clear_session();
        assert!(!vault.has_token().unwrap());
    }

    #[test]
    fn test_create_storage_uses_credentials_file() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());

        let storage = create_storage(&paths).unwrap();
        storage.set("k", "v").unwrap();

        assert!(paths.credentials_file().exists());
    }
}
