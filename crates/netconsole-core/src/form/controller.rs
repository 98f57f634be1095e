//! Account form session controller.

use thiserror::Error;
use tracing::{debug, warn};

use super::event::FormEvent;
use super::reducer::{accepts, reduce};
use super::state::FormState;
use super::submission::{Submission, build_submission};
use super::validation::ValidationError;
use crate::account::Account;
use crate::service::AccountService;

/// Lifecycle of one editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Accepting input. At most one error is displayed.
    #[default]
    Editing,
    /// A request was dispatched or the dialog was closed. Terminal.
    Submitted,
}

/// Why the form refused to produce a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    /// Local validation failed.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The session already submitted or was closed.
    #[error("Form is no longer accepting input")]
    Closed,
}

/// Failure of a submit-and-dispatch round trip.
#[derive(Debug, Error)]
pub enum SubmitError<E> {
    /// Nothing was sent.
    #[error(transparent)]
    Form(#[from] FormError),

    /// The service rejected the request. Passed through unchanged.
    #[error("{0}")]
    Service(E),
}

/// Drives one create or edit session.
///
/// Wraps a [`FormState`] and the [`SessionState`] around it. Each instance
/// owns its state exclusively; the host creates a new controller whenever
/// the dialog opens.
#[derive(Debug, Clone)]
pub struct AccountFormController {
    state: FormState,
    session: SessionState,
}

impl AccountFormController {
    /// Open the form for adding an account.
    #[must_use]
    pub const fn open_create(available_network_ids: Option<Vec<String>>) -> Self {
        Self {
            state: FormState::new_for_create(available_network_ids),
            session: SessionState::Editing,
        }
    }

    /// Open the form for editing `account`.
    #[must_use]
    pub fn open_edit(account: &Account, available_network_ids: Option<Vec<String>>) -> Self {
        Self {
            state: FormState::new_for_edit(account, available_network_ids),
            session: SessionState::Editing,
        }
    }

    /// Current form values.
    #[must_use]
    pub const fn state(&self) -> &FormState {
        &self.state
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn session(&self) -> SessionState {
        self.session
    }

    /// Message to show inline, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message()
    }

    /// Whether the session has ended.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.session == SessionState::Submitted
    }

    /// Apply a user edit. Ignored once the session has ended.
    pub fn apply(&mut self, event: FormEvent) {
        if self.is_submitted() {
            debug!("Ignoring {} after submission", event.name());
            return;
        }
        if !accepts(&self.state, &event) {
            debug!("Ignoring {}: field is not editable", event.name());
            return;
        }
        self.state = reduce(self.state.clone(), event);
    }

    /// Validate and produce the request to dispatch.
    ///
    /// On success the session moves to [`SessionState::Submitted`] and the
    /// password entries are dropped from the form. On validation failure
    /// the message is stored and the session stays editable.
    ///
    /// # Errors
    ///
    /// Returns `FormError::Validation` for invalid input, or
    /// `FormError::Closed` if the session already ended.
    pub fn submit(&mut self) -> Result<Submission, FormError> {
        if self.is_submitted() {
            return Err(FormError::Closed);
        }

        match build_submission(&self.state) {
            Ok(submission) => {
                self.state = self.state.clone().with_error(None).without_secrets();
                self.session = SessionState::Submitted;
                Ok(submission)
            }
            Err(e) => {
                warn!("Account form rejected: {} ({})", e, e.field());
                self.state = self.state.clone().with_error(Some(e.message().to_string()));
                Err(e.into())
            }
        }
    }

    /// Submit and dispatch to `service` exactly once.
    ///
    /// The session stays [`SessionState::Submitted`] if the service fails;
    /// call [`Self::reopen_with_error`] to let the user retry.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Form` when nothing was sent, or
    /// `SubmitError::Service` with the service's own error.
    pub async fn submit_to<S>(&mut self, service: &S) -> Result<Account, SubmitError<S::Error>>
    where
        S: AccountService,
    {
        let submission = self.submit()?;
        submission.dispatch(service).await.map_err(|e| {
            warn!("Account service rejected the request");
            SubmitError::Service(e)
        })
    }

    /// Put the session back into editing with `message` shown.
    ///
    /// Used by the host after a failed dispatch.
    pub fn reopen_with_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!("Reopening account form: {message}");
        self.state = self.state.clone().with_error(Some(message));
        self.session = SessionState::Editing;
    }

    /// Dialog dismissed without saving.
    pub fn close(&mut self) {
        self.state = self.state.clone().without_secrets();
        self.session = SessionState::Submitted;
    }
}
