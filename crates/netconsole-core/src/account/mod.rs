//! Account module.
//!
//! Provides the account record handed to the form and the payload sent back
//! to the account-management service.

mod model;
mod payload;

pub use model::{Account, AccountId, Role};
pub use payload::AccountPayload;
