//! The route-guard decision function.
//!
//! The guard is stateless per invocation: every navigation produces a
//! fresh decision from the current path, the whitelist, and the
//! authentication state read at evaluation time. Decisions are never
//! cached — the state may change between any two navigations.

use crate::config::GuardConfig;
use crate::whitelist::Whitelist;
use chalkboard_access::AuthState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single navigation attempt, consumed by the guard and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    target_path: String,
}

impl NavigationRequest {
    /// Creates a request for the given target path.
    #[must_use]
    pub fn new(target_path: impl Into<String>) -> Self {
        Self {
            target_path: target_path.into(),
        }
    }

    /// Returns the path the user is attempting to reach.
    #[must_use]
    pub fn target_path(&self) -> &str {
        &self.target_path
    }
}

/// Outcome of evaluating a navigation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardDecision {
    /// Render the requested path.
    Allow,
    /// Redirect instead of rendering; the host must replace the current
    /// history entry, not push.
    Redirect {
        /// The fallback path to redirect to.
        to: String,
    },
}

impl GuardDecision {
    /// Returns true if the navigation may proceed.
    #[must_use]
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns the redirect target, if the navigation was denied.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::Redirect { to } => Some(to),
        }
    }
}

impl fmt::Display for GuardDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::Redirect { to } => write!(f, "redirect to {to}"),
        }
    }
}

/// Decides, per navigation, whether a path may be rendered.
///
/// The guard holds the validated whitelist and an explicit handle to the
/// shared [`AuthState`]; it reads the state fresh on every evaluation.
/// Built [`detached`](RouteGuard::detached), it has no state to consult
/// and fails closed: every non-public path redirects.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    whitelist: Whitelist,
    login_path: String,
    auth: Option<AuthState>,
}

impl RouteGuard {
    /// Creates a guard bound to the given authentication state.
    #[must_use]
    pub fn new(config: &GuardConfig, auth: AuthState) -> Self {
        Self::build(config, Some(auth))
    }

    /// Creates a guard with no authentication state attached.
    ///
    /// Every evaluation treats the session as unauthenticated.
    #[must_use]
    pub fn detached(config: &GuardConfig) -> Self {
        Self::build(config, None)
    }

    fn build(config: &GuardConfig, auth: Option<AuthState>) -> Self {
        let whitelist = Whitelist::from_patterns(&config.whitelist);

        if !whitelist.covers(&config.login_path) {
            tracing::warn!(
                login_path = %config.login_path,
                "login path is not whitelisted; unauthenticated redirects cannot settle"
            );
        }

        Self {
            whitelist,
            login_path: config.login_path.clone(),
            auth,
        }
    }

    /// Evaluates a navigation request against the current state.
    ///
    /// Public paths are always reachable; everything else requires an
    /// authenticated session and otherwise redirects to the login path.
    #[must_use]
    pub fn decide(&self, request: &NavigationRequest) -> GuardDecision {
        let path = request.target_path();

        if self.whitelist.covers(path) {
            tracing::debug!(path, "navigation allowed: public path");
            return GuardDecision::Allow;
        }

        let authenticated = self
            .auth
            .as_ref()
            .is_some_and(AuthState::is_authenticated);

        if authenticated {
            tracing::debug!(path, "navigation allowed: authenticated session");
            GuardDecision::Allow
        } else {
            tracing::info!(
                path,
                to = %self.login_path,
                "navigation redirected: authentication required"
            );
            GuardDecision::Redirect {
                to: self.login_path.clone(),
            }
        }
    }

    /// Returns the validated whitelist.
    #[must_use]
    pub fn whitelist(&self) -> &Whitelist {
        &self.whitelist
    }

    /// Returns the configured fallback path.
    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }
}
