use log::{info, warn};
use thiserror::Error;
use web_sys::{window, Storage};

const AUTHENTICATED: &str = "true";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid credentials. Try admin / admin.")]
    InvalidCredentials,
}

/// Backing store for the single persisted admin flag.
pub trait SessionStore {
    fn read(&self) -> Option<String>;
    fn write(&self, value: &str);
    fn clear(&self);
}

/// Browser `localStorage` under a fixed key. Missing window or storage
/// reads as absent; write failures are logged and dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalStorageStore {
    key: &'static str,
}

impl LocalStorageStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Option<Storage> {
        window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl SessionStore for LocalStorageStore {
    fn read(&self) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(self.key).ok()).flatten()
    }

    fn write(&self, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(self.key, value).is_err() {
                    warn!("Could not persist {}", self.key);
                }
            }
            None => warn!("Local storage unavailable, session will not persist"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(self.key);
        }
    }
}

pub trait CredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Demo credential check against a fixed pair. Not authentication.
#[derive(Clone, Debug, PartialEq)]
pub struct LiteralCredentials {
    username: &'static str,
    password: &'static str,
}

impl Default for LiteralCredentials {
    fn default() -> Self {
        Self {
            username: "admin",
            password: "admin",
        }
    }
}

impl CredentialVerifier for LiteralCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    LoggedOut,
    LoggedIn,
}

/// Gate in front of the admin view. The in-memory flag mirrors the store:
/// login writes `"true"` to both, logout clears both.
pub struct SessionGate<S, V = LiteralCredentials> {
    store: S,
    verifier: V,
    authenticated: bool,
}

impl<S: SessionStore, V: CredentialVerifier> SessionGate<S, V> {
    pub fn new(store: S, verifier: V) -> Self {
        let mut gate = Self {
            store,
            verifier,
            authenticated: false,
        };
        gate.initialize();
        gate
    }

    /// Reloads the flag from the store. Only the exact string `"true"` counts.
    pub fn initialize(&mut self) -> bool {
        self.authenticated = self.store.read().as_deref() == Some(AUTHENTICATED);
        self.authenticated
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_authenticated() {
            SessionPhase::LoggedIn
        } else {
            SessionPhase::LoggedOut
        }
    }

    pub fn attempt_login(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        if !self.verifier.verify(username, password) {
            info!("Admin login rejected");
            return Err(AuthError::InvalidCredentials);
        }
        self.store.write(AUTHENTICATED);
        self.authenticated = true;
        info!("Admin logged in");
        Ok(())
    }

    pub fn logout(&mut self) {
        self.store.clear();
        self.authenticated = false;
        info!("Admin logged out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStore {
        value: Rc<RefCell<Option<String>>>,
    }

    impl MemoryStore {
        fn with(value: &str) -> Self {
            let store = Self::default();
            *store.value.borrow_mut() = Some(value.to_string());
            store
        }

        fn get(&self) -> Option<String> {
            self.value.borrow().clone()
        }
    }

    impl SessionStore for MemoryStore {
        fn read(&self) -> Option<String> {
            self.get()
        }

        fn write(&self, value: &str) {
            *self.value.borrow_mut() = Some(value.to_string());
        }

        fn clear(&self) {
            self.value.borrow_mut().take();
        }
    }

    /// Acts like a browser with storage disabled.
    struct UnavailableStore;

    impl SessionStore for UnavailableStore {
        fn read(&self) -> Option<String> {
            None
        }
        fn write(&self, _value: &str) {}
        fn clear(&self) {}
    }

    fn gate(store: &MemoryStore) -> SessionGate<MemoryStore> {
        SessionGate::new(store.clone(), LiteralCredentials::default())
    }

    #[test]
    fn empty_store_starts_logged_out() {
        let store = MemoryStore::default();
        let mut gate = gate(&store);
        assert!(!gate.is_authenticated());
        assert!(!gate.initialize());
        assert_eq!(gate.phase(), SessionPhase::LoggedOut);
    }

    #[test]
    fn only_exact_true_restores_session() {
        assert!(gate(&MemoryStore::with("true")).is_authenticated());
        for stored in ["TRUE", "True", "1", "yes", "", " true", "true "] {
            assert!(!gate(&MemoryStore::with(stored)).is_authenticated(), "{stored:?}");
        }
    }

    #[test]
    fn unavailable_storage_reads_as_logged_out() {
        let mut gate = SessionGate::new(UnavailableStore, LiteralCredentials::default());
        assert!(!gate.initialize());
        assert_eq!(gate.phase(), SessionPhase::LoggedOut);
    }

    #[test]
    fn correct_credentials_log_in_and_persist() {
        let store = MemoryStore::default();
        let mut gate = gate(&store);
        assert_eq!(gate.attempt_login("admin", "admin"), Ok(()));
        assert_eq!(gate.phase(), SessionPhase::LoggedIn);
        assert_eq!(store.get().as_deref(), Some("true"));

        // A fresh gate over the same storage picks the session back up.
        assert!(gate_after_reload(&store));
    }

    fn gate_after_reload(store: &MemoryStore) -> bool {
        gate(store).is_authenticated()
    }

    #[test]
    fn wrong_credentials_leave_state_untouched() {
        let store = MemoryStore::default();
        let mut gate = gate(&store);
        for (user, pass) in [("admin", "wrong"), ("root", "admin"), ("", ""), ("Admin", "admin"), ("admin ", "admin")] {
            assert_eq!(gate.attempt_login(user, pass), Err(AuthError::InvalidCredentials));
            assert_eq!(gate.phase(), SessionPhase::LoggedOut);
            assert_eq!(store.get(), None);
        }
    }

    #[test]
    fn invalid_credentials_message_is_user_facing() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid credentials. Try admin / admin."
        );
    }

    #[test]
    fn logout_clears_store_and_is_idempotent() {
        let store = MemoryStore::default();
        let mut gate = gate(&store);
        gate.attempt_login("admin", "admin").unwrap();

        gate.logout();
        assert_eq!(gate.phase(), SessionPhase::LoggedOut);
        assert_eq!(store.get(), None);

        gate.logout();
        assert_eq!(gate.phase(), SessionPhase::LoggedOut);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn custom_verifier_replaces_literal_pair() {
        struct Nobody;
        impl CredentialVerifier for Nobody {
            fn verify(&self, _: &str, _: &str) -> bool {
                false
            }
        }

        let store = MemoryStore::default();
        let mut gate = SessionGate::new(store.clone(), Nobody);
        assert_eq!(gate.attempt_login("admin", "admin"), Err(AuthError::InvalidCredentials));
        assert_eq!(store.get(), None);
    }
}
