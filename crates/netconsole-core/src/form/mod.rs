//! Account form module.
//!
//! The form is a single immutable [`FormState`] value advanced by the pure
//! [`reduce`] function. Validation and payload construction are pure
//! functions of that state; [`AccountFormController`] adds the session
//! lifecycle on top.

mod controller;
mod event;
mod reducer;
mod state;
mod submission;
mod validation;

pub use controller::{AccountFormController, FormError, SessionState, SubmitError};
pub use event::FormEvent;
pub use reducer::reduce;
pub use state::{FormMode, FormState};
pub use submission::{Submission, build_submission};
pub use validation::{ValidationError, ValidationResult, validate};
