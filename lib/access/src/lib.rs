//! Session-scoped authentication state for the chalkboard client.
//!
//! This crate provides:
//! - `UserIdentity`: who the current session belongs to
//! - `AuthState`: the single source of truth for "is this session
//!   authenticated", shared by handle across the whole application
//! - an explicit subscribe/notify mechanism so consumers can react to
//!   login/logout transitions without any ambient lookup
//!
//! The state lives in memory for the lifetime of the application session.
//! It is never persisted by this crate; a collaborator may store and
//! restore an [`AuthSnapshot`] if session continuity is wanted.
//!
//! # Example
//!
//! ```
//! use chalkboard_access::{AuthState, UserIdentity};
//!
//! let auth = AuthState::new();
//! assert!(!auth.is_authenticated());
//!
//! auth.login(UserIdentity::new("Alice"));
//! assert!(auth.is_authenticated());
//! assert_eq!(auth.current_user().unwrap().display_name(), "Alice");
//!
//! auth.logout();
//! assert!(!auth.is_authenticated());
//! ```

pub mod identity;
pub mod state;

pub use identity::UserIdentity;
pub use state::{AuthSnapshot, AuthState, ObserverId};
