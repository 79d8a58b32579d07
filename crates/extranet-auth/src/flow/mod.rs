//! The login flow: credential validation, alerts and the view state
//! machine that routes the user through provider challenges.

mod alert;
mod controller;
pub(crate) mod messages;
mod validate;

pub use alert::{Alert, AlertKind};
pub use controller::{AuthFlow, AuthFlowController, SubmitOutcome};
pub use validate::{validate, Credentials, ValidationErrors, MIN_PASSWORD_CHARS};
