//! Billed Submission Library
//!
//! The new-bill workflow: validate the receipt a user picked, upload it to the bill
//! store and stage its reference, then assemble and persist the bill when the form is
//! submitted.
//!
//! Everything outside the workflow (navigation, user alerts, error reporting, the user
//! session) is reached through the traits in [`hooks`], so hosts and tests can plug in
//! their own implementations.

pub mod coordinator;
pub mod error;
pub mod events;
pub mod hooks;
pub mod stager;
pub mod validator;

// Re-export commonly used types
pub use coordinator::{SubmissionCoordinator, SubmissionOutcome};
pub use error::{SubmissionError, SubmissionResult};
pub use events::{FileChangeEvent, PreventDefault, SubmitEvent};
pub use hooks::{
    DiagnosticSink, Navigator, StaticSession, TracingDiagnostics, TracingNotifier, UserNotifier,
    UserSession,
};
pub use stager::{StageResult, UploadStager};
pub use validator::{ReceiptValidator, ValidationError};
