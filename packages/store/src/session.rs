//! # Persisted session: credential and user profile
//!
//! The browser keeps the signed-in session under two keys of a key/value
//! storage: [`TOKEN_KEY`] holds the opaque credential and [`USER_KEY`] the
//! JSON-serialised [`UserProfile`]. [`SessionStore`] is the only code that
//! touches those keys; everything else works with a typed [`Session`].
//!
//! Backends implement [`KeyValueStorage`]:
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`crate::LocalStorage`] | WASM with the `web` feature, `window.localStorage` |
//! | [`crate::MemoryStorage`] | everything else, and tests |

use crate::models::{Session, UserProfile};

/// Storage key of the credential.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the serialised user profile.
pub const USER_KEY: &str = "user";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("failed to serialise user profile: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Synchronous string key/value storage.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str);
}

/// Typed access to the persisted session.
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The stored credential, if present and non-empty.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// The stored user profile. A missing or malformed entry reads as `None`.
    pub fn user(&self) -> Option<UserProfile> {
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Ignoring malformed stored user profile: {}", e);
                None
            }
        }
    }

    /// Load the full session. Requires a credential; the profile defaults
    /// to empty when missing.
    pub fn load(&self) -> Option<Session> {
        let token = self.token()?;
        Some(Session {
            token,
            user: self.user().unwrap_or_default(),
        })
    }

    /// Persist both keys.
    pub fn save(&self, session: &Session) -> Result<(), StoreError> {
        let user = serde_json::to_string(&session.user)?;
        self.storage.set(TOKEN_KEY, &session.token)?;
        self.storage.set(USER_KEY, &user)
    }

    /// Remove both keys.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;

    fn session() -> Session {
        Session {
            token: "tok-123".to_string(),
            user: UserProfile {
                name: Some("Ada".to_string()),
                ..UserProfile::default()
            },
        }
    }

    #[test]
    fn test_empty_storage_has_no_session() {
        let store = SessionStore::new(MemoryStorage::new());
        assert!(store.token().is_none());
        assert!(store.user().is_none());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.save(&session()).unwrap();

        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok-123"));
        assert_eq!(storage.get(USER_KEY).as_deref(), Some(r#"{"name":"Ada"}"#));
        assert_eq!(store.load(), Some(session()));
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.save(&session()).unwrap();

        store.clear();

        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_empty_token_is_absent() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "").unwrap();
        storage.set(USER_KEY, r#"{"name":"Ada"}"#).unwrap();
        assert!(SessionStore::new(storage).load().is_none());
    }

    #[test]
    fn test_token_without_user_loads_empty_profile() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "tok").unwrap();
        storage.set(USER_KEY, "not json").unwrap();

        let loaded = SessionStore::new(storage).load().unwrap();
        assert_eq!(loaded.token, "tok");
        assert_eq!(loaded.user, UserProfile::default());
    }
}
