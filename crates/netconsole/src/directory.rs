//! In-process account directory.
//!
//! Stands in for the remote account-management API so sessions can be
//! driven end to end. Nothing is written to disk.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use netconsole_core::{Account, AccountId, AccountPayload, AccountService, Role};
use thiserror::Error;
use tracing::{debug, info};

/// Errors returned by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// Another account already uses this email.
    #[error("An account with email {0} already exists")]
    DuplicateEmail(String),

    /// No account has this ID.
    #[error("Account not found: {0}")]
    NotFound(AccountId),
}

#[derive(Debug, Default)]
struct Inner {
    accounts: BTreeMap<AccountId, Account>,
    next_id: u64,
}

/// Accounts held in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct Directory {
    inner: Mutex<Inner>,
}

impl Directory {
    /// Create a directory seeded with `accounts`.
    #[must_use]
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let accounts = accounts
            .into_iter()
            .map(|account| (account.id.clone(), account))
            .collect();
        Self {
            inner: Mutex::new(Inner {
                accounts,
                next_id: 0,
            }),
        }
    }

    /// Look up an account by ID.
    #[must_use]
    pub fn get(&self, id: &AccountId) -> Option<Account> {
        self.lock().accounts.get(id).cloned()
    }

    /// Number of accounts held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().accounts.len()
    }

    /// Whether the directory holds no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

const fn role_for(payload: &AccountPayload) -> Role {
    if payload.super_user {
        Role::SuperUser
    } else {
        Role::Standard
    }
}

impl AccountService for Directory {
    type Error = DirectoryError;

    async fn create_account(&self, payload: AccountPayload) -> Result<Account, DirectoryError> {
        let mut inner = self.lock();
        if inner.accounts.values().any(|a| a.email == payload.email) {
            return Err(DirectoryError::DuplicateEmail(payload.email));
        }

        // Skip IDs already taken by seeded accounts.
        let id = loop {
            inner.next_id += 1;
            let candidate = AccountId::new(format!("u{}", inner.next_id));
            if !inner.accounts.contains_key(&candidate) {
                break candidate;
            }
        };

        let account = Account::new(id.clone(), payload.email.as_str())
            .with_role(role_for(&payload))
            .with_networks(payload.network_ids);
        inner.accounts.insert(id.clone(), account.clone());

        info!("Created account {id} ({})", account.email);
        Ok(account)
    }

    async fn update_account(
        &self,
        id: &AccountId,
        payload: AccountPayload,
    ) -> Result<Account, DirectoryError> {
        let mut inner = self.lock();
        let account = inner
            .accounts
            .get_mut(id)
            .ok_or_else(|| DirectoryError::NotFound(id.clone()))?;

        account.role = role_for(&payload);
        account.network_ids = payload.network_ids;
        if payload.password.is_some() {
            debug!("Password changed for account {id}");
        }

        info!("Updated account {id}");
        Ok(account.clone())
    }
}
