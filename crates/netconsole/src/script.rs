//! Session scripts.
//!
//! A script seeds the directory and replays form sessions against it, the
//! way the console's user-management page would.

use netconsole_core::{
    Account, AccountFormController, AccountId, AccountService, FormEvent, SubmitError,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::directory::Directory;

/// A batch of form sessions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionScript {
    /// Accounts present before any session runs.
    pub accounts: Vec<Account>,
    /// Networks offered in the form; overrides the settings file.
    pub networks: Option<Vec<String>>,
    /// Sessions to replay, in order.
    pub sessions: Vec<ScriptedSession>,
}

/// One open-edit-save cycle of the account dialog.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScriptedSession {
    /// Account to edit. Absent means "Add User".
    pub edit: Option<AccountId>,
    /// User edits, in order.
    pub events: Vec<FormEvent>,
    /// Dismiss the dialog instead of saving.
    pub cancel: bool,
}

/// Result of one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The service accepted the request.
    Saved {
        /// Session index.
        session: usize,
        /// Account as returned by the service.
        account: Account,
    },
    /// Validation failed; nothing was sent.
    Invalid {
        /// Session index.
        session: usize,
        /// Inline error message.
        error: String,
    },
    /// The service rejected the request.
    Failed {
        /// Session index.
        session: usize,
        /// Error reported by the service.
        error: String,
    },
    /// Dialog dismissed.
    Cancelled {
        /// Session index.
        session: usize,
    },
}

/// Replay every session in `script` against `directory`.
///
/// `default_networks` is used when the script does not list its own.
pub async fn run(
    script: SessionScript,
    directory: &Directory,
    default_networks: Option<Vec<String>>,
) -> Vec<Outcome> {
    let networks = script.networks.or(default_networks);
    let mut outcomes = Vec::with_capacity(script.sessions.len());

    for (session, planned) in script.sessions.into_iter().enumerate() {
        let outcome = run_session(session, planned, directory, networks.clone()).await;
        outcomes.push(outcome);
    }

    outcomes
}

async fn run_session(
    session: usize,
    planned: ScriptedSession,
    directory: &Directory,
    networks: Option<Vec<String>>,
) -> Outcome {
    let mut controller = match &planned.edit {
        Some(id) => match directory.get(id) {
            Some(account) => AccountFormController::open_edit(&account, networks),
            None => {
                warn!("Session {session}: no account {id} to edit");
                return Outcome::Failed {
                    session,
                    error: format!("Account not found: {id}"),
                };
            }
        },
        None => AccountFormController::open_create(networks),
    };
    info!("Session {session}: {}", controller.state().mode().title());

    for event in planned.events {
        controller.apply(event);
    }

    if planned.cancel {
        controller.close();
        return Outcome::Cancelled { session };
    }

    submit(session, &mut controller, directory).await
}

async fn submit<S>(
    session: usize,
    controller: &mut AccountFormController,
    service: &S,
) -> Outcome
where
    S: AccountService,
    S::Error: std::fmt::Display,
{
    match controller.submit_to(service).await {
        Ok(account) => {
            info!(
                "Session {session}: saved {} as {}",
                account.email,
                account.role.display_name()
            );
            Outcome::Saved { session, account }
        }
        Err(SubmitError::Form(e)) => Outcome::Invalid {
            session,
            error: e.to_string(),
        },
        Err(SubmitError::Service(e)) => {
            controller.reopen_with_error(e.to_string());
            // Report what the reopened form shows.
            let error = controller.error_message().unwrap_or_default().to_string();
            Outcome::Failed { session, error }
        }
    }
}
