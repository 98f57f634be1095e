//! Account model types.

use serde::{Deserialize, Serialize};

/// Opaque, stable identifier for an existing account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub String);

impl AccountId {
    /// Create a new account ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Privilege level of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    /// Regular user, restricted to the networks listed on the account.
    #[default]
    #[serde(rename = "STANDARD")]
    Standard,
    /// Unrestricted network scope.
    #[serde(rename = "SUPERUSER")]
    SuperUser,
}

impl Role {
    /// Get display name for the role.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Standard => "User",
            Self::SuperUser => "Super User",
        }
    }

    /// Whether this role implies access to every network.
    #[must_use]
    pub const fn is_super_user(&self) -> bool {
        matches!(self, Self::SuperUser)
    }
}

/// A user account as reported by the account-management service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Stable identifier.
    pub id: AccountId,
    /// Email address. Cannot be changed once the account exists.
    pub email: String,
    /// Privilege level.
    #[serde(default)]
    pub role: Role,
    /// Accessible network scopes. Ignored for super users.
    #[serde(rename = "networkIDs", default)]
    pub network_ids: Vec<String>,
    /// Owning organization, if the host tracks one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

impl Account {
    /// Create a standard account with no network access.
    #[must_use]
    pub fn new(id: impl Into<AccountId>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            role: Role::Standard,
            network_ids: Vec::new(),
            organization: None,
        }
    }

    /// Set the role.
    #[must_use]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Set the accessible networks.
    #[must_use]
    pub fn with_networks<I, S>(mut self, networks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.network_ids = networks.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the account is a super user.
    #[must_use]
    pub const fn is_super_user(&self) -> bool {
        self.role.is_super_user()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::redundant_clone,
    clippy::manual_string_new,
    clippy::needless_collect
)]
mod tests {
    use super::*;

    mod account_id_tests {
        use super::*;

        #[test]
        fn new() {
            let id = AccountId::new("u42");
            assert_eq!(id.as_str(), "u42");
        }

        #[test]
        fn display() {
            let id = AccountId::from("u123");
            assert_eq!(format!("{id}"), "u123");
        }

        #[test]
        fn serializes_as_plain_string() {
            let json = serde_json::to_string(&AccountId::new("u1")).unwrap();
            assert_eq!(json, "\"u1\"");
        }
    }

    mod role_tests {
        use super::*;

        #[test]
        fn default_is_standard() {
            assert_eq!(Role::default(), Role::Standard);
        }

        #[test]
        fn display_names() {
            assert_eq!(Role::Standard.display_name(), "User");
            assert_eq!(Role::SuperUser.display_name(), "Super User");
        }

        #[test]
        fn wire_names() {
            assert_eq!(
                serde_json::to_string(&Role::SuperUser).unwrap(),
                "\"SUPERUSER\""
            );
            let role: Role = serde_json::from_str("\"STANDARD\"").unwrap();
            assert_eq!(role, Role::Standard);
        }
    }

    mod account_tests {
        use super::*;

        #[test]
        fn new_is_standard_without_networks() {
            let account = Account::new("u1", "a@b.com");
            assert_eq!(account.id, AccountId::new("u1"));
            assert_eq!(account.email, "a@b.com");
            assert!(!account.is_super_user());
            assert!(account.network_ids.is_empty());
        }

        #[test]
        fn deserializes_host_record() {
            let json = r#"{"id":"u7","email":"ops@example.com","role":"SUPERUSER","networkIDs":["lte"],"organization":"magma"}"#;
            let account: Account = serde_json::from_str(json).unwrap();
            assert_eq!(account.id.as_str(), "u7");
            assert!(account.is_super_user());
            assert_eq!(account.network_ids, vec!["lte".to_string()]);
            assert_eq!(account.organization.as_deref(), Some("magma"));
        }

        #[test]
        fn deserializes_minimal_record() {
            let account: Account =
                serde_json::from_str(r#"{"id":"u8","email":"x@y.z"}"#).unwrap();
            assert_eq!(account.role, Role::Standard);
            assert!(account.network_ids.is_empty());
            assert!(account.organization.is_none());
        }
    }
}
