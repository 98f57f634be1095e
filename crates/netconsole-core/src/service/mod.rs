//! Account-management service seam.
//!
//! The form never talks to a transport directly. The host implements
//! [`AccountService`] on top of whatever API client it uses, and the
//! controller calls it once per successful submission.

use std::future::Future;

use crate::account::{Account, AccountId, AccountPayload};

/// Remote operations the account form dispatches to.
///
/// Errors are opaque to the form and are handed back to the caller as-is.
pub trait AccountService {
    /// Failure reported by the service.
    type Error;

    /// Create a new account.
    fn create_account(
        &self,
        payload: AccountPayload,
    ) -> impl Future<Output = Result<Account, Self::Error>> + Send;

    /// Update an existing account. A payload without a password leaves the
    /// current password in place.
    fn update_account(
        &self,
        id: &AccountId,
        payload: AccountPayload,
    ) -> impl Future<Output = Result<Account, Self::Error>> + Send;
}
