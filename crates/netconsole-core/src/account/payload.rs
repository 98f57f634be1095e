//! Account mutation payload.

use serde::{Deserialize, Serialize};

/// Normalized request body for creating or updating an account.
///
/// `password` is `None` when an existing account keeps its current password.
/// It is then left out of the serialized form entirely, so the service can
/// tell "unchanged" apart from "set to the empty string".
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPayload {
    /// Email address.
    pub email: String,
    /// New password, if one should be set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Whether the account gets unrestricted network scope.
    pub super_user: bool,
    /// Accessible networks. Always empty for super users.
    #[serde(rename = "networkIDs")]
    pub network_ids: Vec<String>,
}

impl AccountPayload {
    /// Whether this payload changes the password.
    #[must_use]
    pub const fn sets_password(&self) -> bool {
        self.password.is_some()
    }
}

impl std::fmt::Debug for AccountPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountPayload")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("super_user", &self.super_user)
            .field("network_ids", &self.network_ids)
            .finish()
    }
}
