//! The shared authentication state container.
//!
//! `AuthState` is the single source of truth for whether the current
//! session is authenticated. It is initialized signed-out at application
//! start and transitions only through the explicit [`AuthState::login`]
//! and [`AuthState::logout`] operations.
//!
//! Every consumer receives its own clone of the handle; all clones share
//! the same underlying state. Observers registered with
//! [`AuthState::subscribe`] are invoked synchronously on the mutating
//! call, after the new state is visible, so the very next guard
//! evaluation always sees the transition.

use crate::identity::UserIdentity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, RwLock};

/// Handle returned by [`AuthState::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Arc<dyn Fn(&AuthSnapshot) + Send + Sync>;

/// A point-in-time view of the authentication state.
///
/// The "user present only if authenticated" invariant is structural:
/// `is_authenticated` is derived from the presence of the identity, so a
/// snapshot cannot express an authenticated session without a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSnapshot {
    user: Option<UserIdentity>,
    authenticated_at: Option<DateTime<Utc>>,
}

impl AuthSnapshot {
    fn signed_out() -> Self {
        Self {
            user: None,
            authenticated_at: None,
        }
    }

    /// Returns true if the session is authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Returns the authenticated user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&UserIdentity> {
        self.user.as_ref()
    }

    /// Returns when the current login happened, if authenticated.
    #[must_use]
    pub fn authenticated_at(&self) -> Option<DateTime<Utc>> {
        self.authenticated_at
    }
}

struct Inner {
    snapshot: AuthSnapshot,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
}

/// Shared, session-scoped authentication state.
///
/// Cloning the handle is cheap; all clones observe and mutate the same
/// state. There is exactly one writer path (login/logout/restore) and any
/// number of readers.
#[derive(Clone)]
pub struct AuthState {
    inner: Arc<RwLock<Inner>>,
}

impl AuthState {
    /// Creates a new, signed-out state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                snapshot: AuthSnapshot::signed_out(),
                observers: Vec::new(),
                next_observer: 0,
            })),
        }
    }

    /// Signs the session in as the given identity.
    ///
    /// Always succeeds. Observers are notified synchronously before this
    /// call returns, so the transition is visible to the next guard
    /// evaluation no matter how it is triggered.
    pub fn login(&self, identity: UserIdentity) {
        let (snapshot, observers) = {
            let mut inner = self.inner.write().unwrap();
            inner.snapshot = AuthSnapshot {
                user: Some(identity),
                authenticated_at: Some(Utc::now()),
            };
            (inner.snapshot.clone(), Self::observer_list(&inner))
        };

        if let Some(user) = snapshot.user() {
            tracing::info!(user = %user.user_id(), "session signed in");
        }
        Self::notify(&observers, &snapshot);
    }

    /// Signs the session out and clears the identity.
    ///
    /// Idempotent: calling this while already signed out is a no-op and
    /// notifies nobody.
    pub fn logout(&self) {
        let notified = {
            let mut inner = self.inner.write().unwrap();
            if !inner.snapshot.is_authenticated() {
                None
            } else {
                inner.snapshot = AuthSnapshot::signed_out();
                Some((inner.snapshot.clone(), Self::observer_list(&inner)))
            }
        };

        match notified {
            Some((snapshot, observers)) => {
                tracing::info!("session signed out");
                Self::notify(&observers, &snapshot);
            }
            None => {
                tracing::debug!("logout ignored, session already signed out");
            }
        }
    }

    /// Returns true if the session is currently authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.read().unwrap().snapshot.is_authenticated()
    }

    /// Returns the currently authenticated user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<UserIdentity> {
        self.inner.read().unwrap().snapshot.user().cloned()
    }

    /// Returns a point-in-time copy of the state.
    #[must_use]
    pub fn snapshot(&self) -> AuthSnapshot {
        self.inner.read().unwrap().snapshot.clone()
    }

    /// Replaces the state with a previously captured snapshot.
    ///
    /// Intended for collaborators that persist sessions across reloads.
    /// Observers are notified only if the restored state differs from the
    /// current one.
    pub fn restore(&self, snapshot: AuthSnapshot) {
        let notified = {
            let mut inner = self.inner.write().unwrap();
            if inner.snapshot == snapshot {
                None
            } else {
                inner.snapshot = snapshot;
                Some((inner.snapshot.clone(), Self::observer_list(&inner)))
            }
        };

        if let Some((snapshot, observers)) = notified {
            tracing::debug!(
                authenticated = snapshot.is_authenticated(),
                "session state restored"
            );
            Self::notify(&observers, &snapshot);
        }
    }

    /// Registers an observer invoked on every state transition.
    ///
    /// The observer runs synchronously on the thread performing the
    /// transition, after the new state is visible. It may re-read the
    /// state through any handle without deadlocking.
    #[must_use]
    pub fn subscribe(&self, observer: impl Fn(&AuthSnapshot) + Send + Sync + 'static) -> ObserverId {
        let mut inner = self.inner.write().unwrap();
        let id = ObserverId(inner.next_observer);
        inner.next_observer += 1;
        inner.observers.push((id, Arc::new(observer)));
        id
    }

    /// Removes a previously registered observer.
    ///
    /// Returns false if the observer was already removed.
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        let mut inner = self.inner.write().unwrap();
        let before = inner.observers.len();
        inner.observers.retain(|(observer_id, _)| *observer_id != id);
        inner.observers.len() != before
    }

    fn observer_list(inner: &Inner) -> Vec<Observer> {
        inner
            .observers
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect()
    }

    // Called with the lock released so observers can re-read the state.
    fn notify(observers: &[Observer], snapshot: &AuthSnapshot) {
        for observer in observers {
            observer(snapshot);
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthState")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn starts_signed_out() {
        let auth = AuthState::new();
        assert!(!auth.is_authenticated());
        assert!(auth.current_user().is_none());
        assert!(auth.snapshot().authenticated_at().is_none());
    }

    #[test]
    fn login_sets_user_and_timestamp() {
        let auth = AuthState::new();
        let before = Utc::now();
        auth.login(UserIdentity::new("Alice"));

        assert!(auth.is_authenticated());
        let snapshot = auth.snapshot();
        assert_eq!(snapshot.user().unwrap().display_name(), "Alice");
        let at = snapshot.authenticated_at().expect("timestamp set");
        assert!(at >= before);
        assert!(at <= Utc::now());
    }

    #[test]
    fn logout_clears_user() {
        let auth = AuthState::new();
        auth.login(UserIdentity::new("Alice"));
        auth.logout();

        assert!(!auth.is_authenticated());
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn logout_is_idempotent() {
        let auth = AuthState::new();
        auth.login(UserIdentity::new("Alice"));
        auth.logout();
        let once = auth.snapshot();
        auth.logout();
        assert_eq!(auth.snapshot(), once);
    }

    #[test]
    fn observers_notified_on_login_and_logout() {
        let auth = AuthState::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = Arc::clone(&seen);
        let _id = auth.subscribe(move |snapshot| {
            seen_clone.lock().unwrap().push(snapshot.is_authenticated());
        });

        auth.login(UserIdentity::new("Alice"));
        auth.logout();

        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn noop_logout_notifies_nobody() {
        let auth = AuthState::new();
        let calls = Arc::new(Mutex::new(0u32));

        let calls_clone = Arc::clone(&calls);
        let _id = auth.subscribe(move |_| {
            *calls_clone.lock().unwrap() += 1;
        });

        auth.logout();
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn notification_is_synchronous_and_state_visible() {
        let auth = AuthState::new();
        let observed = Arc::new(Mutex::new(None));

        // The observer re-reads through a second handle; the new state
        // must already be visible.
        let handle = auth.clone();
        let observed_clone = Arc::clone(&observed);
        let _id = auth.subscribe(move |_| {
            *observed_clone.lock().unwrap() = Some(handle.is_authenticated());
        });

        auth.login(UserIdentity::new("Alice"));
        assert_eq!(*observed.lock().unwrap(), Some(true));
    }

    #[test]
    fn unsubscribed_observer_not_called() {
        let auth = AuthState::new();
        let calls = Arc::new(Mutex::new(0u32));

        let calls_clone = Arc::clone(&calls);
        let id = auth.subscribe(move |_| {
            *calls_clone.lock().unwrap() += 1;
        });

        assert!(auth.unsubscribe(id));
        assert!(!auth.unsubscribe(id));

        auth.login(UserIdentity::new("Alice"));
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn clones_share_state() {
        let auth = AuthState::new();
        let other = auth.clone();

        auth.login(UserIdentity::new("Alice"));
        assert!(other.is_authenticated());

        other.logout();
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn snapshot_restore_roundtrip() {
        let auth = AuthState::new();
        auth.login(UserIdentity::new("Alice").with_email("alice@example.com"));
        let saved = auth.snapshot();

        let fresh = AuthState::new();
        fresh.restore(saved.clone());

        assert!(fresh.is_authenticated());
        assert_eq!(fresh.snapshot(), saved);
    }

    #[test]
    fn restore_identical_state_notifies_nobody() {
        let auth = AuthState::new();
        let calls = Arc::new(Mutex::new(0u32));

        let calls_clone = Arc::clone(&calls);
        let _id = auth.subscribe(move |_| {
            *calls_clone.lock().unwrap() += 1;
        });

        auth.restore(auth.snapshot());
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn snapshot_serde_roundtrip() {
        let auth = AuthState::new();
        auth.login(UserIdentity::new("Alice"));
        let snapshot = auth.snapshot();

        let json = serde_json::to_string(&snapshot).expect("serialize");
        let parsed: AuthSnapshot = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(snapshot, parsed);
        assert!(parsed.is_authenticated());
    }
}
