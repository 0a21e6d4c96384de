//! Guard configuration.
//!
//! The guard is configured once at application start with the list of
//! public path patterns and the fallback path unauthenticated sessions
//! are redirected to. This is deliberately separate from any page-routing
//! table: the guard knows which paths are public, never how pages are
//! constructed.

use serde::Deserialize;

/// Static configuration for the route guard.
#[derive(Debug, Clone, Deserialize)]
pub struct GuardConfig {
    /// Path patterns reachable without authentication, in order.
    #[serde(default)]
    pub whitelist: Vec<String>,

    /// Where unauthenticated sessions are redirected.
    #[serde(default = "default_login_path")]
    pub login_path: String,
}

fn default_login_path() -> String {
    "/login".to_string()
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            whitelist: Vec::new(),
            login_path: default_login_path(),
        }
    }
}
