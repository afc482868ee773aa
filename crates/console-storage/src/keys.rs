//! Storage key constants.

/// Storage keys used by the console
pub struct StorageKeys;

impl StorageKeys {
    /// Session token. The backend treats this as an opaque string.
    pub const TOKEN: &'static str = "token";

    /// Session metadata snapshot (JSON)
    pub const SESSION_META: &'static str = "session_meta";
}
