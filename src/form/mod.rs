//! Order form: state, validation, and the submission lifecycle.
//!
//! - `validator`: pure field validation producing error codes
//! - `controller`: touched-state gating and the submission state machine

mod controller;
mod validator;

pub use controller::{OrderFormController, SubmissionStatus};
pub use validator::{validate, ErrorCode, FieldErrors, FormField, OrderForm};
