//! # netconsole-core
//!
//! Account form logic for the `netconsole` network-management console.
//!
//! This crate provides:
//! - Account model (`Account`, `AccountId`, `Role`)
//! - Normalized mutation payloads (`AccountPayload`)
//! - Form state with a pure reducer and local validation
//! - The `AccountFormController` session state machine
//! - The abstract `AccountService` collaborator the controller dispatches to
//! - Host settings loading

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod account;
mod error;
pub mod form;
pub mod service;
pub mod settings;

pub use account::{Account, AccountId, AccountPayload, Role};
pub use error::{Error, Result};
pub use form::{
    AccountFormController, FormError, FormEvent, FormMode, FormState, SessionState, SubmitError,
    Submission, ValidationError, ValidationResult, build_submission, reduce, validate,
};
pub use service::AccountService;
pub use settings::HostSettings;
