//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionState` is the reactive snapshot read by the route guard, the shell
//! and the pages. `SessionStore` is the only thing that mutates it: it owns the
//! storage backend and the authenticator, and pairs every in-memory change with
//! the matching write to `authToken` / `userData`.
//!
//! LIFECYCLE
//! =========
//! `Uninitialized -> Loading -> {Anonymous | Authenticated}`, then
//! `Anonymous -> Authenticated` on login and `Authenticated -> Anonymous` on
//! logout. Login is only accepted from `Anonymous`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::{AuthError, Authenticator};
use crate::net::types::{Session, User};
use crate::util::storage::KeyValueStore;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key holding the JSON user record.
pub const USER_KEY: &str = "userData";

/// Coarse lifecycle phase derived from [`SessionState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Uninitialized,
    Loading,
    Anonymous,
    Authenticated,
}

/// Current session snapshot. Fields are private; only [`SessionStore`] mutates.
///
/// User and token live together in one `Option<Session>`, so one can never be
/// present without the other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    session: Option<Session>,
    loading: bool,
    initialized: bool,
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn phase(&self) -> SessionPhase {
        match (self.initialized, self.loading, &self.session) {
            (false, false, _) => SessionPhase::Uninitialized,
            (false, true, _) => SessionPhase::Loading,
            (true, _, Some(_)) => SessionPhase::Authenticated,
            (true, _, None) => SessionPhase::Anonymous,
        }
    }
}

/// Owns persistence and authentication for the session.
#[derive(Clone, Debug)]
pub struct SessionStore<S, A> {
    storage: S,
    authenticator: A,
}

impl<S: KeyValueStore, A: Authenticator> SessionStore<S, A> {
    pub fn new(storage: S, authenticator: A) -> Self {
        Self { storage, authenticator }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Enter `Loading`. Safe to call during render on both server and client so
    /// the first paint agrees.
    pub fn begin_initialize(&self, state: &mut SessionState) {
        if !state.initialized {
            state.loading = true;
        }
    }

    /// Adopt the persisted session, if both entries are present and readable.
    /// Always leaves `loading` false. Runs at most once per state.
    pub fn finish_initialize(&self, state: &mut SessionState) {
        if state.initialized {
            return;
        }
        state.session = self.restore();
        state.initialized = true;
        state.loading = false;
        match state.user() {
            Some(user) => log::info!("restored session for {}", user.email),
            None => log::debug!("no stored session"),
        }
    }

    /// `begin_initialize` followed by `finish_initialize`.
    pub fn initialize(&self, state: &mut SessionState) {
        self.begin_initialize(state);
        self.finish_initialize(state);
    }

    fn restore(&self) -> Option<Session> {
        let token = self.storage.get(TOKEN_KEY);
        let raw_user = self.storage.get(USER_KEY);
        let (Some(token), Some(raw_user)) = (token, raw_user) else {
            return None;
        };
        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => Some(Session { user, token }),
            Err(e) => {
                log::warn!("discarding unreadable stored user record: {e}");
                self.clear_storage();
                None
            }
        }
    }

    /// Start a login attempt: sets `loading`. Only valid from `Anonymous`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AlreadySignedIn`] if a session already exists and
    /// [`AuthError::NotReady`] if the stored session has not been checked yet.
    /// State and storage are left untouched in both cases.
    pub fn begin_login(&self, state: &mut SessionState) -> Result<(), AuthError> {
        match state.phase() {
            SessionPhase::Anonymous => {
                state.loading = true;
                Ok(())
            }
            SessionPhase::Authenticated => Err(AuthError::AlreadySignedIn),
            SessionPhase::Uninitialized | SessionPhase::Loading => Err(AuthError::NotReady),
        }
    }

    /// Ask the authenticator for a session. Does not touch state.
    ///
    /// # Errors
    ///
    /// Propagates the authenticator's [`AuthError`].
    pub async fn authenticate(&self, identifier: &str, secret: &str) -> Result<Session, AuthError> {
        self.authenticator.authenticate(identifier, secret).await
    }

    /// Apply an authentication outcome: persist and adopt on success, leave the
    /// session unchanged on failure. Clears `loading` either way.
    ///
    /// # Errors
    ///
    /// Returns the failure carried by `outcome`, or
    /// [`AuthError::AlreadySignedIn`] if a session appeared in the meantime.
    pub fn complete_login(
        &self,
        state: &mut SessionState,
        outcome: Result<Session, AuthError>,
    ) -> Result<User, AuthError> {
        state.loading = false;
        let session = match outcome {
            Ok(session) => session,
            Err(e) => {
                log::warn!("login failed: {e}");
                return Err(e);
            }
        };
        if state.is_authenticated() {
            return Err(AuthError::AlreadySignedIn);
        }
        self.persist(&session);
        let user = session.user.clone();
        log::info!("signed in as {}", user.email);
        state.session = Some(session);
        state.initialized = true;
        Ok(user)
    }

    /// Full login: `begin_login`, `authenticate`, `complete_login`.
    ///
    /// # Errors
    ///
    /// See [`Self::begin_login`] and [`Self::complete_login`].
    pub async fn login(&self, state: &mut SessionState, identifier: &str, secret: &str) -> Result<User, AuthError> {
        self.begin_login(state)?;
        let outcome = self.authenticate(identifier, secret).await;
        self.complete_login(state, outcome)
    }

    /// Drop the session and both storage entries. Idempotent.
    pub fn logout(&self, state: &mut SessionState) {
        self.clear_storage();
        if let Some(session) = state.session.take() {
            log::info!("signed out {}", session.user.email);
        }
    }

    fn persist(&self, session: &Session) {
        let raw_user = match serde_json::to_string(&session.user) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("could not serialize user record: {e}");
                return;
            }
        };
        let written = self
            .storage
            .set(TOKEN_KEY, &session.token)
            .and_then(|()| self.storage.set(USER_KEY, &raw_user));
        if let Err(e) = written {
            log::warn!("session not persisted: {e}");
            self.clear_storage();
        }
    }

    fn clear_storage(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}
