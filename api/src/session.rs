//! # Session state and token persistence
//!
//! A [`Session`] pairs the raw bearer token with the [`Identity`] decoded
//! from it. The two move together: establishing a session decodes and
//! persists the token in one step, clearing it drops both and erases the
//! durable copy. Between those two points nothing is written to storage.
//!
//! Persistence goes through the [`TokenStorage`] trait so the same session
//! logic runs against browser `localStorage` in the app and an in-memory
//! store in tests and native builds.

use crate::error::TokenError;
use crate::models::Identity;
use crate::token::decode_identity;

/// Key under which the token is persisted.
pub const TOKEN_KEY: &str = "token";

/// Durable storage for the session token. Exactly one slot.
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// In-memory storage for tests and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slot: std::sync::Arc<std::sync::Mutex<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }

    fn save(&self, token: &str) {
        *self.slot.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }
}

/// `localStorage`-backed storage used by the browser build.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
#[derive(Clone, Debug, Default)]
pub struct BrowserStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl TokenStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        Self::local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }

    fn save(&self, token: &str) {
        if let Some(s) = Self::local_storage() {
            if let Err(e) = s.set_item(TOKEN_KEY, token) {
                tracing::error!("failed to persist session token: {e:?}");
            }
        }
    }

    fn clear(&self) {
        if let Some(s) = Self::local_storage() {
            let _ = s.remove_item(TOKEN_KEY);
        }
    }
}

/// The signed-in state of the dashboard.
///
/// `identity` is always the decode of `token`; both are present or both
/// are absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub identity: Option<Identity>,
}

impl Session {
    /// Restore the session persisted by a previous visit.
    ///
    /// A stored token that no longer decodes is discarded and its durable
    /// copy erased, leaving a clean signed-out state rather than a broken
    /// startup.
    pub fn from_storage(storage: &impl TokenStorage) -> Self {
        let Some(token) = storage.load() else {
            return Self::default();
        };
        match decode_identity(&token) {
            Ok(identity) => Self {
                token: Some(token),
                identity: Some(identity),
            },
            Err(e) => {
                tracing::warn!("discarding unreadable stored token: {e}");
                storage.clear();
                Self::default()
            }
        }
    }

    /// Establish a session from a freshly issued token, persisting it.
    /// On decode failure nothing is persisted.
    pub fn establish(token: String, storage: &impl TokenStorage) -> Result<Self, TokenError> {
        let identity = decode_identity(&token)?;
        storage.save(&token);
        Ok(Self {
            token: Some(token),
            identity: Some(identity),
        })
    }

    /// Sign out: drop the in-memory state and erase the durable copy.
    pub fn clear(storage: &impl TokenStorage) -> Self {
        storage.clear();
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tests::make_token;

    fn admin_token() -> String {
        make_token(&serde_json::json!({
            "id": "u1",
            "name": "Asha",
            "email": "asha@example.com",
            "phone": "555-0101",
            "role": "admin",
        }))
    }

    #[test]
    fn test_establish_persists_and_decodes() {
        let storage = MemoryStorage::new();
        let session = Session::establish(admin_token(), &storage).unwrap();

        assert!(session.is_authenticated());
        let identity = session.identity.as_ref().unwrap();
        assert_eq!(identity.role, "admin");
        assert_eq!(identity.email, "asha@example.com");
        assert_eq!(storage.load(), session.token);
    }

    #[test]
    fn test_establish_bad_token_persists_nothing() {
        let storage = MemoryStorage::new();
        assert!(Session::establish("garbage".to_string(), &storage).is_err());
        assert!(storage.load().is_none());
    }

    #[test]
    fn test_from_storage_restores_previous_session() {
        let storage = MemoryStorage::new();
        storage.save(&admin_token());

        let session = Session::from_storage(&storage);
        assert!(session.is_authenticated());
        assert_eq!(session.identity.unwrap().id, "u1");
    }

    #[test]
    fn test_from_storage_without_token_is_signed_out() {
        let storage = MemoryStorage::new();
        let session = Session::from_storage(&storage);
        assert!(!session.is_authenticated());
        assert!(session.token.is_none());
    }

    #[test]
    fn test_from_storage_discards_malformed_token() {
        let storage = MemoryStorage::new();
        storage.save("not.a.token.at.all");

        let session = Session::from_storage(&storage);
        assert!(!session.is_authenticated());
        assert!(session.identity.is_none());
        // The broken token must not survive for the next start either.
        assert!(storage.load().is_none());
    }

    #[test]
    fn test_clear_erases_token_and_identity() {
        let storage = MemoryStorage::new();
        let _ = Session::establish(admin_token(), &storage).unwrap();

        let session = Session::clear(&storage);
        assert!(session.token.is_none());
        assert!(session.identity.is_none());
        assert!(storage.load().is_none());
    }
}
