//! Form input events.

use serde::{Deserialize, Serialize};

/// A single user edit dispatched against the form.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FormEvent {
    /// Email field changed.
    EmailChanged(String),
    /// Password field changed.
    PasswordChanged(String),
    /// Confirm-password field changed.
    ConfirmPasswordChanged(String),
    /// Super user checkbox changed.
    SuperUserToggled(bool),
    /// Whole network selection replaced.
    NetworkSelectionChanged(Vec<String>),
    /// One network checked or unchecked.
    NetworkToggled(String),
}

impl FormEvent {
    /// Short name of the event, safe to log.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::EmailChanged(_) => "email_changed",
            Self::PasswordChanged(_) => "password_changed",
            Self::ConfirmPasswordChanged(_) => "confirm_password_changed",
            Self::SuperUserToggled(_) => "super_user_toggled",
            Self::NetworkSelectionChanged(_) => "network_selection_changed",
            Self::NetworkToggled(_) => "network_toggled",
        }
    }
}

impl std::fmt::Debug for FormEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmailChanged(email) => f.debug_tuple("EmailChanged").field(email).finish(),
            Self::PasswordChanged(_) => f.debug_tuple("PasswordChanged").field(&"<redacted>").finish(),
            Self::ConfirmPasswordChanged(_) => f
                .debug_tuple("ConfirmPasswordChanged")
                .field(&"<redacted>")
                .finish(),
            Self::SuperUserToggled(on) => f.debug_tuple("SuperUserToggled").field(on).finish(),
            Self::NetworkSelectionChanged(ids) => {
                f.debug_tuple("NetworkSelectionChanged").field(ids).finish()
            }
            Self::NetworkToggled(id) => f.debug_tuple("NetworkToggled").field(id).finish(),
        }
    }
}
