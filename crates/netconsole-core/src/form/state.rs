//! Account form state model.

use crate::account::{Account, AccountId};

/// Whether the form creates a new account or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormMode {
    /// Add a new account.
    Create,
    /// Edit the account with the given ID.
    Edit(AccountId),
}

impl FormMode {
    /// Dialog title for this mode.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Create => "Add User",
            Self::Edit(_) => "Edit User",
        }
    }

    /// Whether an existing account is being edited.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }

    /// ID of the account being edited, if any.
    #[must_use]
    pub const fn account_id(&self) -> Option<&AccountId> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }
}

/// State for one account editing session.
///
/// Values are only changed through [`crate::form::reduce`]; every accessor
/// is read-only.
#[derive(Clone, PartialEq, Eq)]
pub struct FormState {
    pub(crate) mode: FormMode,
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) confirm_password: String,
    pub(crate) is_super_user: bool,
    /// Insertion-ordered, no duplicates.
    pub(crate) selected_network_ids: Vec<String>,
    pub(crate) available_network_ids: Option<Vec<String>>,
    pub(crate) error_message: Option<String>,
}

impl FormState {
    /// Create an empty form for adding an account.
    ///
    /// `available_network_ids` is the list the host offers for selection;
    /// `None` means no network selector is shown.
    #[must_use]
    pub const fn new_for_create(available_network_ids: Option<Vec<String>>) -> Self {
        Self {
            mode: FormMode::Create,
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            is_super_user: false,
            selected_network_ids: Vec::new(),
            available_network_ids,
            error_message: None,
        }
    }

    /// Create a form prefilled from an existing account.
    ///
    /// The account's networks are only preselected when the host offers a
    /// network list at all.
    #[must_use]
    pub fn new_for_edit(account: &Account, available_network_ids: Option<Vec<String>>) -> Self {
        let selected_network_ids = if available_network_ids.is_some() {
            dedup_ordered(account.network_ids.iter().cloned())
        } else {
            Vec::new()
        };

        Self {
            mode: FormMode::Edit(account.id.clone()),
            email: account.email.clone(),
            password: String::new(),
            confirm_password: String::new(),
            is_super_user: account.is_super_user(),
            selected_network_ids,
            available_network_ids,
            error_message: None,
        }
    }

    /// Create or edit mode.
    #[must_use]
    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Current email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Current password entry.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Current confirm-password entry.
    #[must_use]
    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    /// Whether the super user box is checked.
    #[must_use]
    pub const fn is_super_user(&self) -> bool {
        self.is_super_user
    }

    /// Networks currently selected, in selection order.
    #[must_use]
    pub fn selected_network_ids(&self) -> &[String] {
        &self.selected_network_ids
    }

    /// Networks the host offers for selection.
    #[must_use]
    pub fn available_network_ids(&self) -> Option<&[String]> {
        self.available_network_ids.as_deref()
    }

    /// Whether the host offered `network_id` in the selector.
    #[must_use]
    pub fn offers_network(&self, network_id: &str) -> bool {
        self.available_network_ids
            .as_ref()
            .is_some_and(|ids| ids.iter().any(|id| id == network_id))
    }

    /// Last validation or submission failure, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Email is fixed once the account exists.
    #[must_use]
    pub const fn email_editable(&self) -> bool {
        !self.mode.is_edit()
    }

    /// The network selector is shown only when the host offers networks,
    /// and is disabled for super users.
    #[must_use]
    pub const fn network_selection_enabled(&self) -> bool {
        self.available_network_ids.is_some() && !self.is_super_user
    }

    pub(crate) fn with_error(mut self, message: Option<String>) -> Self {
        self.error_message = message;
        self
    }

    /// Drop password entries once they have been handed off.
    pub(crate) fn without_secrets(mut self) -> Self {
        self.password.clear();
        self.confirm_password.clear();
        self
    }
}

impl std::fmt::Debug for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |s: &str| if s.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("FormState")
            .field("mode", &self.mode)
            .field("email", &self.email)
            .field("password", &redact(&self.password))
            .field("confirm_password", &redact(&self.confirm_password))
            .field("is_super_user", &self.is_super_user)
            .field("selected_network_ids", &self.selected_network_ids)
            .field("available_network_ids", &self.available_network_ids)
            .field("error_message", &self.error_message)
            .finish()
    }
}

/// Collect identifiers keeping first occurrence order.
pub(crate) fn dedup_ordered<I>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out: Vec<String> = Vec::new();
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}
