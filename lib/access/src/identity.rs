//! The identity of the user a session belongs to.

use chalkboard_core::UserId;
use serde::{Deserialize, Serialize};

/// Identity of an authenticated user.
///
/// Supplied to [`AuthState::login`](crate::AuthState::login) by the login
/// collaborator. An identity always carries a user ID and a display name,
/// so an "empty" identity cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Internal platform user ID.
    user_id: UserId,
    /// Name shown in the header and navigation menus.
    display_name: String,
    /// Email address, if the login flow provided one.
    email: Option<String>,
}

impl UserIdentity {
    /// Creates a new identity with a freshly generated user ID.
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            user_id: UserId::new(),
            display_name: display_name.into(),
            email: None,
        }
    }

    /// Creates an identity with all fields specified.
    ///
    /// Use this when reconstituting an identity from a stored snapshot.
    #[must_use]
    pub fn with_all_fields(
        user_id: UserId,
        display_name: impl Into<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            email,
        }
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Returns the user's internal platform ID.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the user's display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the user's email address, if available.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
