//! Session Store
//!
//! Authentication flag derived from a token kept in durable browser storage.
//! One `Session` is created at the app root and handed to whoever needs it;
//! consumers observe transitions through `subscribe`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Durable home of the credential token
pub trait TokenStorage {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn remove(&self);
}

/// `window.localStorage` under a fixed key
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStorage for BrowserStorage {
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok().flatten()
    }

    fn set(&self, token: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(&self.key, token) {
                    tracing::error!(?e, "failed to persist auth token");
                }
            }
            None => tracing::error!("localStorage unavailable, token not persisted"),
        }
    }

    fn remove(&self) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.remove_item(&self.key) {
                    tracing::error!(?e, "failed to clear auth token");
                }
            }
            None => tracing::error!("localStorage unavailable, token not cleared"),
        }
    }
}

/// In-process storage, for tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    token: Rc<RefCell<Option<String>>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn with_token(token: &str) -> Self {
        Self { token: Rc::new(RefCell::new(Some(token.to_string()))) }
    }

    /// A second handle onto the same slot, to mutate storage behind the session's back
    pub fn handle(&self) -> Self {
        Self { token: self.token.clone() }
    }
}

#[cfg(test)]
impl TokenStorage for MemoryStorage {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn remove(&self) {
        *self.token.borrow_mut() = None;
    }
}

type Subscriber = Rc<dyn Fn(bool)>;

struct SessionInner {
    storage: Box<dyn TokenStorage>,
    authenticated: Cell<bool>,
    subscribers: RefCell<Vec<(usize, Subscriber)>>,
    next_id: Cell<usize>,
}

/// Shared session handle; clones observe the same state
#[derive(Clone)]
pub struct Session {
    inner: Rc<SessionInner>,
}

impl Session {
    pub fn new(storage: impl TokenStorage + 'static) -> Self {
        let authenticated = has_token(storage.get());
        Self {
            inner: Rc::new(SessionInner {
                storage: Box::new(storage),
                authenticated: Cell::new(authenticated),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.authenticated.get()
    }

    /// Token to attach to outgoing requests
    pub fn token(&self) -> Option<String> {
        self.inner.storage.get().filter(|t| !t.is_empty())
    }

    /// Persist `token`. An empty token is not a credential and is ignored.
    pub fn login(&self, token: &str) {
        if token.is_empty() {
            tracing::warn!("session: ignoring empty token");
            return;
        }
        self.inner.storage.set(token);
        tracing::debug!("session: logged in");
        self.set_authenticated(true);
    }

    pub fn logout(&self) {
        self.inner.storage.remove();
        tracing::debug!("session: logged out");
        self.set_authenticated(false);
    }

    /// Re-read storage (reload or another tab) and refresh the flag
    pub fn check_auth(&self) -> bool {
        let authenticated = has_token(self.inner.storage.get());
        self.set_authenticated(authenticated);
        authenticated
    }

    /// Register for flag changes. Returns an id for `unsubscribe`.
    pub fn subscribe(&self, f: impl Fn(bool) + 'static) -> usize {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.subscribers.borrow_mut().push((id, Rc::new(f)));
        id
    }

    pub fn unsubscribe(&self, id: usize) {
        self.inner.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    fn set_authenticated(&self, value: bool) {
        if self.inner.authenticated.replace(value) == value {
            return;
        }
        // Snapshot so a subscriber may (un)subscribe while being notified
        let subscribers: Vec<Subscriber> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, f)| f.clone())
            .collect();
        for f in subscribers {
            f(value);
        }
    }
}

fn has_token(token: Option<String>) -> bool {
    token.is_some_and(|t| !t.is_empty())
}
