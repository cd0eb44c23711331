// Application intake: validation of submitted applications and the
// acknowledgement record handed back to the applicant. Nothing is persisted.

pub mod handlers;
pub mod intake;
pub mod models;
pub mod validation;

pub use intake::submit;
pub use models::{AcknowledgedApplication, ApplicationPayload, ApplicationResponse, ApplicationStatus};
pub use validation::{validate_application, ValidationError};
