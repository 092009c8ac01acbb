//! Session store: the single source of truth for who is logged in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app constructs exactly one store at startup and hands it to pages via
//! context. Pages call `login`/`register`/`logout`; the route guard reads
//! `is_authenticated` through [`AuthPredicate`]. Subscribers get the new
//! [`AuthState`] after every session change so reactive layers never poll.
//!
//! STORAGE LAYOUT
//! ==============
//! - session key: JSON [`User`] (no password), absent when logged out.
//! - users key: JSON array of [`CredentialRecord`], absent means empty.
//!
//! Concurrent writers (two tabs registering at once) are not coordinated;
//! the last write to the users key wins.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use crate::config::AuthConfig;
use crate::digest::digest;
use crate::error::AuthError;
use crate::guard::AuthPredicate;
use crate::storage::KeyValueStore;
use crate::user::{AuthState, CredentialRecord, User};

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&AuthState)>;
type Clock = Box<dyn Fn() -> u64>;

/// Session and credential store over a [`KeyValueStore`].
///
/// Single-threaded: interior mutability via `RefCell`, so the store is
/// `!Sync` and every operation takes `&self`.
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
    config: AuthConfig,
    session: RefCell<Option<User>>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_subscription: Cell<u64>,
    clock: Clock,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Build the store and restore any persisted session.
    ///
    /// `clock` returns Unix milliseconds and mints user ids. Browser builds
    /// pass `Date.now()`; `SystemTime` is unavailable on
    /// `wasm32-unknown-unknown`.
    ///
    /// An unreadable session record is removed from storage and the store
    /// starts logged out. This never fails.
    pub fn new(storage: S, config: AuthConfig, clock: impl Fn() -> u64 + 'static) -> Self {
        let store = Self {
            storage,
            config,
            session: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
            clock: Box::new(clock),
        };
        store.initialize();
        store
    }

    fn initialize(&self) {
        let Some(raw) = self.storage.get_item(&self.config.session_key) else {
            log::debug!("no persisted session");
            return;
        };
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                log::info!("restored session for {}", user.email);
                *self.session.borrow_mut() = Some(user);
            }
            Err(e) => {
                log::warn!("discarding unreadable session record: {e}");
                self.storage.remove_item(&self.config.session_key);
            }
        }
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.session.borrow().clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_some()
    }

    #[must_use]
    pub fn auth_state(&self) -> AuthState {
        AuthState::from_user(self.current_user())
    }

    /// Create a credential record and log the new user in.
    ///
    /// # Errors
    ///
    /// - [`AuthError::EmailTaken`] if `email` is already registered; nothing
    ///   is written.
    /// - [`AuthError::CorruptCredentials`] if the stored collection is not
    ///   valid JSON.
    /// - [`AuthError::Storage`] if a write is rejected. A rejected session
    ///   write rolls the users key back, so the email stays free to retry.
    pub fn register(&self, email: &str, password: &str, name: &str) -> Result<User, AuthError> {
        let mut records = self.load_records()?;
        if records.iter().any(|r| r.user.email == email) {
            log::debug!("register rejected: {email} already registered");
            return Err(AuthError::EmailTaken);
        }

        let user = User {
            id: self.next_id(&records),
            email: email.to_owned(),
            name: name.to_owned(),
        };
        let previous = self.storage.get_item(&self.config.users_key);
        records.push(CredentialRecord { user: user.clone(), password: digest(password) });
        self.storage
            .set_item(&self.config.users_key, &serde_json::to_string(&records)?)?;

        if let Err(e) = self.establish(user.clone()) {
            self.restore_users(previous.as_deref());
            return Err(e);
        }
        log::info!("registered {email} as {}", user.id);
        Ok(user)
    }

    /// Log in with an email and plaintext password.
    ///
    /// # Errors
    ///
    /// - [`AuthError::InvalidCredentials`] when no record matches both
    ///   fields; the session is left as it was.
    /// - [`AuthError::CorruptCredentials`] if the stored collection is not
    ///   valid JSON.
    /// - [`AuthError::Storage`] if the session cannot be persisted.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let records = self.load_records()?;
        let Some(record) = CredentialRecord::find(&records, email, &digest(password)) else {
            log::debug!("login rejected for {email}");
            return Err(AuthError::InvalidCredentials);
        };
        let user = record.clone().into_user();
        self.establish(user.clone())?;
        log::info!("logged in {email}");
        Ok(user)
    }

    /// Clear the session in memory and in storage. Always returns `true`.
    pub fn logout(&self) -> bool {
        let previous = self.session.borrow_mut().take();
        self.storage.remove_item(&self.config.session_key);
        if let Some(user) = previous {
            log::info!("logged out {}", user.email);
        }
        self.notify();
        true
    }

    /// Registered users without their password digests.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::CorruptCredentials`] if the stored collection is
    /// not valid JSON.
    pub fn users(&self) -> Result<Vec<User>, AuthError> {
        Ok(self
            .load_records()?
            .into_iter()
            .map(CredentialRecord::into_user)
            .collect())
    }

    /// Call `listener` with the new state after every session change.
    pub fn subscribe(&self, listener: impl Fn(&AuthState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(sid, _)| *sid != id);
        listeners.len() != before
    }

    fn load_records(&self) -> Result<Vec<CredentialRecord>, AuthError> {
        match self.storage.get_item(&self.config.users_key) {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Put the users key back the way it was before a failed register.
    fn restore_users(&self, previous: Option<&str>) {
        let key = &self.config.users_key;
        match previous {
            Some(raw) => {
                if let Err(e) = self.storage.set_item(key, raw) {
                    log::warn!("could not roll back {key}: {e}");
                }
            }
            None => self.storage.remove_item(key),
        }
    }

    fn establish(&self, user: User) -> Result<(), AuthError> {
        self.storage
            .set_item(&self.config.session_key, &serde_json::to_string(&user)?)?;
        *self.session.borrow_mut() = Some(user);
        self.notify();
        Ok(())
    }

    /// Millisecond timestamp, bumped past every numeric id already stored.
    ///
    /// If the largest stored id is `u64::MAX` there is nothing above it, so
    /// the clock value is used and stepped until it is unused.
    fn next_id(&self, records: &[CredentialRecord]) -> String {
        let now = (self.clock)();
        let taken: HashSet<u64> = records.iter().filter_map(|r| r.user.id.parse().ok()).collect();
        let floor = taken.iter().max().and_then(|max| max.checked_add(1)).unwrap_or(0);
        let mut id = now.max(floor);
        while taken.contains(&id) {
            id = id.wrapping_add(1);
        }
        id.to_string()
    }

    fn notify(&self) {
        let state = self.auth_state();
        // Snapshot so a listener may subscribe or unsubscribe while running.
        let listeners: Vec<Listener> = self.listeners.borrow().iter().map(|(_, l)| Rc::clone(l)).collect();
        for listener in listeners {
            listener(&state);
        }
    }
}

impl<S: KeyValueStore> AuthPredicate for SessionStore<S> {
    fn is_authenticated(&self) -> bool {
        SessionStore::is_authenticated(self)
    }
}
