//! Account form validation.

use super::state::FormState;

/// Local validation failure. Never reaches the account service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Password and confirmation differ.
    PasswordMismatch,
    /// Email is empty.
    EmptyEmail,
    /// Password is empty while creating an account.
    EmptyPassword,
}

impl ValidationError {
    /// Get human-readable error message.
    ///
    /// Empty email and empty password share one message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::PasswordMismatch => "Passwords must match",
            Self::EmptyEmail | Self::EmptyPassword => "Email or password cannot be empty",
        }
    }

    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::PasswordMismatch => "confirm_password",
            Self::EmptyEmail => "email",
            Self::EmptyPassword => "password",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating the form.
pub type ValidationResult = Result<(), ValidationError>;

/// Validate the form.
///
/// Rules run in order and the first failure wins:
/// 1. password and confirmation must be equal
/// 2. a new account needs a password, and every account needs an email
///
/// An empty password on an existing account means "keep the current one".
/// Values are compared as entered, without trimming.
///
/// # Errors
///
/// Returns the first `ValidationError` encountered.
pub fn validate(state: &FormState) -> ValidationResult {
    if state.password != state.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    if !state.mode.is_edit() && state.password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }

    if state.email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }

    Ok(())
}
