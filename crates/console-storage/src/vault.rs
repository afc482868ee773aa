//! High-level API for the durable session record.

use crate::{SecureStorage, StorageError, StorageKeys, StorageResult};
use serde::{Deserialize, Serialize};

/// Session metadata snapshot stored alongside the token.
///
/// Lets `campus status` report who is signed in without a network call.
/// The sync invariant is defined on the token slot; this blob is derived
/// convenience data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMeta {
    /// Email of the signed-in user, when known
    #[serde(default)]
    pub email: Option<String>,
    /// When the session was established (RFC 3339)
    pub signed_in_at: String,
}

impl SessionMeta {
    /// Build a snapshot stamped with the current time.
    pub fn now(email: Option<String>) -> Self {
        Self {
            email,
            signed_in_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// High-level API for storing and retrieving the session record
pub struct TokenVault {
    storage: Box<dyn SecureStorage>,
}

impl TokenVault {
    /// Create a new vault with the given storage backend
    pub fn new(storage: Box<dyn SecureStorage>) -> Self {
        Self { storage }
    }

    // ==========================================
    // Token
    // ==========================================

    /// Store the session token
    pub fn set_token(&self, token: &str) -> StorageResult<()> {
        self.storage.set(StorageKeys::TOKEN, token)
    }

    /// Retrieve the session token
    pub fn get_token(&self) -> StorageResult<Option<String>> {
        self.storage.get(StorageKeys::TOKEN)
    }

    /// Delete the session token, returning whether one existed
    pub fn delete_token(&self) -> StorageResult<bool> {
        self.storage.delete(StorageKeys::TOKEN)
    }

    /// Check if a token is present
    pub fn has_token(&self) -> StorageResult<bool> {
        self.storage.has(StorageKeys::TOKEN)
    }

    // ==========================================
    // Session metadata
    // ==========================================

    /// Store the session metadata snapshot
    pub fn set_session_meta(&self, meta: &SessionMeta) -> StorageResult<()> {
        let json =
            serde_json::to_string(meta).map_err(|e| StorageError::Encoding(e.to_string()))?;
        self.storage.set(StorageKeys::SESSION_META, &json)
    }

    /// Retrieve the session metadata snapshot
    pub fn get_session_meta(&self) -> StorageResult<Option<SessionMeta>> {
        match self.storage.get(StorageKeys::SESSION_META)? {
            Some(json) => {
                let meta: SessionMeta = serde_json::from_str(&json)
                    .map_err(|e| StorageError::Encoding(e.to_string()))?;
                Ok(Some(meta))
            }
            None => Ok(None),
        }
    }

    /// Store the complete session record (token + metadata)
    pub fn set_session(&self, token: &str, meta: &SessionMeta) -> StorageResult<()> {
        self.set_token(token)?;
        self.set_session_meta(meta)?;
        Ok(())
    }

    /// Clear the session record. Best effort: a failed delete is logged
    /// and does not abort the remaining deletes.
    pub fn clear_session(&self) {
        if let Err(e) = self.storage.delete(StorageKeys::TOKEN) {
            tracing::warn!(error = %e, "failed to delete stored token");
        }
        if let Err(e) = self.storage.delete(StorageKeys::SESSION_META) {
            tracing::warn!(error = %e, "failed to delete session metadata");
        }
    }
}
