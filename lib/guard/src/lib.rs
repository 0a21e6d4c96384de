//! Route guarding for the chalkboard client.
//!
//! This crate decides, for every navigation, whether the requested path
//! may be rendered or whether the user must be redirected to the login
//! page. It provides:
//!
//! - the whitelist pattern grammar and matcher (`PathPattern`, `Whitelist`)
//! - the guard decision function (`RouteGuard`, `GuardDecision`)
//! - static guard configuration (`GuardConfig`)
//!
//! The guard only answers allow/redirect; performing the redirect is the
//! hosting shell's job (see `chalkboard-shell`).
//!
//! # Example
//!
//! ```
//! use chalkboard_access::{AuthState, UserIdentity};
//! use chalkboard_guard::{GuardConfig, GuardDecision, NavigationRequest, RouteGuard};
//!
//! let config = GuardConfig {
//!     whitelist: vec![
//!         "/login".to_string(),
//!         "/".to_string(),
//!         "/courses".to_string(),
//!         "/course/*".to_string(),
//!     ],
//!     login_path: "/login".to_string(),
//! };
//!
//! let auth = AuthState::new();
//! let guard = RouteGuard::new(&config, auth.clone());
//!
//! // Public paths are reachable while signed out.
//! let request = NavigationRequest::new("/course/42");
//! assert_eq!(guard.decide(&request), GuardDecision::Allow);
//!
//! // Private paths redirect until the user logs in.
//! let request = NavigationRequest::new("/dashboard");
//! assert!(!guard.decide(&request).is_allow());
//!
//! auth.login(UserIdentity::new("Alice"));
//! assert_eq!(guard.decide(&request), GuardDecision::Allow);
//! ```

pub mod config;
pub mod decision;
pub mod error;
pub mod pattern;
pub mod whitelist;

// Re-export main types at crate root
pub use config::GuardConfig;
pub use decision::{GuardDecision, NavigationRequest, RouteGuard};
pub use error::PatternError;
pub use pattern::PathPattern;
pub use whitelist::Whitelist;
