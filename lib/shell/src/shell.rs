//! The hosting shell: applies guard decisions to a history sink.
//!
//! The shell owns the current path and is the collaborator that actually
//! performs redirects; the guard itself only returns decisions. It also
//! preserves the continuation target: when a navigation is denied, the
//! originally requested path is remembered so a later login can resume
//! it — the guard never carries that state.

use crate::history::HistorySink;
use chalkboard_guard::{GuardDecision, NavigationRequest, RouteGuard};

/// Applies guard decisions to navigation, owning the current path.
///
/// `navigate` is synchronous and decides against the latest target only,
/// so a newer navigation always supersedes an older one — decisions are
/// values applied immediately, never queued.
///
/// The shell does not observe the authentication state itself; the host
/// calls [`refresh`](NavigationShell::refresh) after a login or logout
/// transition.
#[derive(Debug)]
pub struct NavigationShell<H: HistorySink> {
    guard: RouteGuard,
    history: H,
    current: String,
    pending_target: Option<String>,
}

impl<H: HistorySink> NavigationShell<H> {
    /// Creates a shell and navigates to the initial path.
    ///
    /// The initial navigation goes through the guard like any other, so
    /// loading the application on a private path redirects immediately.
    #[must_use]
    pub fn new(guard: RouteGuard, history: H, initial_path: &str) -> Self {
        let mut shell = Self {
            guard,
            history,
            current: String::new(),
            pending_target: None,
        };
        shell.navigate(initial_path);
        shell
    }

    /// Navigates to the given target path.
    ///
    /// The requested entry is recorded first, the way the host router
    /// records it; a denial then replaces that entry with the fallback,
    /// so disallowed attempts never remain in history.
    pub fn navigate(&mut self, target: &str) -> GuardDecision {
        self.history.push(target);

        let decision = self.guard.decide(&NavigationRequest::new(target));
        match &decision {
            GuardDecision::Allow => {
                self.current = target.to_string();
                self.pending_target = None;
            }
            GuardDecision::Redirect { to } => {
                tracing::debug!(target, to = %to, "navigation denied, continuation preserved");
                self.pending_target = Some(target.to_string());
                self.history.replace(to);
                self.current = to.clone();
            }
        }
        decision
    }

    /// Re-evaluates after an authentication transition.
    ///
    /// After a login this resumes the navigation that was interrupted by
    /// the redirect, if one is pending. Otherwise the current path is
    /// re-decided in place, so a logout on a private page redirects out.
    pub fn refresh(&mut self) -> GuardDecision {
        let target = self
            .pending_target
            .clone()
            .unwrap_or_else(|| self.current.clone());

        let decision = self.guard.decide(&NavigationRequest::new(&target));
        match &decision {
            GuardDecision::Allow => {
                if self.pending_target.take().is_some() {
                    tracing::debug!(target = %target, "resuming interrupted navigation");
                    self.history.push(&target);
                    self.current = target;
                }
            }
            GuardDecision::Redirect { to } => {
                if self.pending_target.is_none() {
                    self.pending_target = Some(self.current.clone());
                }
                if self.current != *to {
                    self.history.replace(to);
                    self.current = to.clone();
                }
            }
        }
        decision
    }

    /// Returns the currently rendered path.
    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.current
    }

    /// Returns the navigation target preserved across a redirect, if any.
    #[must_use]
    pub fn pending_target(&self) -> Option<&str> {
        self.pending_target.as_deref()
    }

    /// Returns the history sink.
    #[must_use]
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Returns the guard.
    #[must_use]
    pub fn guard(&self) -> &RouteGuard {
        &self.guard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;
    use chalkboard_access::{AuthState, UserIdentity};
    use chalkboard_guard::GuardConfig;

    fn course_platform_config() -> GuardConfig {
        GuardConfig {
            whitelist: vec![
                "/login".to_string(),
                "/".to_string(),
                "/courses".to_string(),
                "/course/*".to_string(),
            ],
            login_path: "/login".to_string(),
        }
    }

    fn shell_with_auth() -> (NavigationShell<MemoryHistory>, AuthState) {
        let auth = AuthState::new();
        let guard = RouteGuard::new(&course_platform_config(), auth.clone());
        let shell = NavigationShell::new(guard, MemoryHistory::new(), "/");
        (shell, auth)
    }

    #[test]
    fn allowed_navigation_is_pushed() {
        let (mut shell, _auth) = shell_with_auth();
        shell.navigate("/courses");

        assert_eq!(shell.current_path(), "/courses");
        assert_eq!(shell.history().entries(), &["/", "/courses"]);
        assert!(shell.pending_target().is_none());
    }

    #[test]
    fn denied_navigation_replaces_instead_of_pushing() {
        let (mut shell, _auth) = shell_with_auth();
        let decision = shell.navigate("/dashboard");

        assert!(!decision.is_allow());
        assert_eq!(shell.current_path(), "/login");
        // The denied target never remains in history.
        assert_eq!(shell.history().entries(), &["/", "/login"]);
        assert_eq!(shell.pending_target(), Some("/dashboard"));
    }

    #[test]
    fn login_resumes_the_interrupted_navigation() {
        let (mut shell, auth) = shell_with_auth();
        shell.navigate("/dashboard");

        auth.login(UserIdentity::new("Alice"));
        let decision = shell.refresh();

        assert!(decision.is_allow());
        assert_eq!(shell.current_path(), "/dashboard");
        assert!(shell.pending_target().is_none());
        assert_eq!(shell.history().entries(), &["/", "/login", "/dashboard"]);
    }

    #[test]
    fn refresh_without_login_keeps_waiting() {
        let (mut shell, _auth) = shell_with_auth();
        shell.navigate("/dashboard");

        let decision = shell.refresh();

        assert!(!decision.is_allow());
        assert_eq!(shell.current_path(), "/login");
        assert_eq!(shell.pending_target(), Some("/dashboard"));
        // No history churn from an idle refresh.
        assert_eq!(shell.history().entries(), &["/", "/login"]);
    }

    #[test]
    fn logout_on_private_page_redirects_out() {
        let (mut shell, auth) = shell_with_auth();
        auth.login(UserIdentity::new("Alice"));
        shell.navigate("/profile");

        auth.logout();
        let decision = shell.refresh();

        assert!(!decision.is_allow());
        assert_eq!(shell.current_path(), "/login");
        assert_eq!(shell.pending_target(), Some("/profile"));
    }

    #[test]
    fn logout_on_public_page_stays_put() {
        let (mut shell, auth) = shell_with_auth();
        auth.login(UserIdentity::new("Alice"));
        shell.navigate("/courses");

        auth.logout();
        let decision = shell.refresh();

        assert!(decision.is_allow());
        assert_eq!(shell.current_path(), "/courses");
    }

    #[test]
    fn newer_navigation_supersedes_older_continuation() {
        let (mut shell, auth) = shell_with_auth();
        shell.navigate("/dashboard");
        shell.navigate("/profile");

        assert_eq!(shell.pending_target(), Some("/profile"));

        auth.login(UserIdentity::new("Alice"));
        shell.refresh();

        // Only the latest denied target is resumed.
        assert_eq!(shell.current_path(), "/profile");
    }

    #[test]
    fn allowed_navigation_clears_stale_continuation() {
        let (mut shell, auth) = shell_with_auth();
        shell.navigate("/dashboard");
        shell.navigate("/courses");

        assert!(shell.pending_target().is_none());

        auth.login(UserIdentity::new("Alice"));
        let decision = shell.refresh();

        assert!(decision.is_allow());
        assert_eq!(shell.current_path(), "/courses");
    }

    #[test]
    fn initial_load_on_private_path_redirects() {
        let auth = AuthState::new();
        let guard = RouteGuard::new(&course_platform_config(), auth.clone());
        let shell = NavigationShell::new(guard, MemoryHistory::new(), "/admin");

        assert_eq!(shell.current_path(), "/login");
        assert_eq!(shell.pending_target(), Some("/admin"));
        assert_eq!(shell.history().entries(), &["/login"]);
    }
}
