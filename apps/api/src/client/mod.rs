// Headless job board client: HTTP access, the immutable state store and the
// per-user session that drives it. Front ends only render `ClientState`.

pub mod api;
pub mod delayed;
pub mod form;
pub mod session;
pub mod store;

pub use api::{ClientError, HttpJobBoardClient, JobBoardApi};
pub use form::{ApplicationForm, FormField};
pub use session::{SessionConfig, SessionHandle};
pub use store::{ClientState, SubmissionState};
