//! Payload construction and dispatch.

use tracing::info;

use super::state::{FormMode, FormState};
use super::validation::{ValidationError, validate};
use crate::account::{Account, AccountId, AccountPayload};
use crate::service::AccountService;

/// A validated request, ready to hand to the account service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Create a new account.
    Create(AccountPayload),
    /// Update an existing account.
    Update {
        /// Account to update.
        id: AccountId,
        /// New values.
        payload: AccountPayload,
    },
}

impl Submission {
    /// The payload being sent.
    #[must_use]
    pub const fn payload(&self) -> &AccountPayload {
        match self {
            Self::Create(payload) | Self::Update { payload, .. } => payload,
        }
    }

    /// Send the request to the service. Called exactly once per submission.
    ///
    /// # Errors
    ///
    /// Returns the service's error unchanged.
    pub async fn dispatch<S>(self, service: &S) -> Result<Account, S::Error>
    where
        S: AccountService,
    {
        match self {
            Self::Create(payload) => {
                info!("Creating account {}", payload.email);
                service.create_account(payload).await
            }
            Self::Update { id, payload } => {
                info!(
                    "Updating account {id} (password change: {})",
                    payload.sets_password()
                );
                service.update_account(&id, payload).await
            }
        }
    }
}

/// Validate the form and build the request it describes.
///
/// Pure: identical states always produce identical submissions.
/// - networks are empty for super users, whatever is selected
/// - the password is left out when editing with an empty password field
///
/// # Errors
///
/// Returns the first `ValidationError` when the form is invalid.
pub fn build_submission(state: &FormState) -> Result<Submission, ValidationError> {
    validate(state)?;

    let network_ids = if state.is_super_user {
        Vec::new()
    } else {
        state.selected_network_ids.clone()
    };

    let password = if state.mode.is_edit() && state.password.is_empty() {
        None
    } else {
        Some(state.password.clone())
    };

    let payload = AccountPayload {
        email: state.email.clone(),
        password,
        super_user: state.is_super_user,
        network_ids,
    };

    Ok(match &state.mode {
        FormMode::Create => Submission::Create(payload),
        FormMode::Edit(id) => Submission::Update {
            id: id.clone(),
            payload,
        },
    })
}
