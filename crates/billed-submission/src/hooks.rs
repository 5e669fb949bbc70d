//! Hooks to the collaborators around the workflow
//!
//! The workflow never renders anything, routes anywhere or reads the session itself.
//! It calls these traits, which the host implements. Default implementations backed
//! by `tracing` are provided for headless hosts.

use billed_core::{ErrorMetadata, LogLevel, Route};

use crate::error::SubmissionError;

/// Navigation dispatcher. Fire-and-forget.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Sink for non-fatal failures. Must never panic.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, error: &SubmissionError);
}

/// Shows a message to the user (an alert box in a browser host).
pub trait UserNotifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Read access to the connected user's session.
pub trait UserSession: Send + Sync {
    fn email(&self) -> Option<String>;
}

/// Reports failures as `tracing` events at the error's own log level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn report(&self, error: &SubmissionError) {
        let code = error.error_code();
        match error.log_level() {
            LogLevel::Debug => tracing::debug!(error = %error, code, "Submission diagnostic"),
            LogLevel::Warn => tracing::warn!(error = %error, code, "Submission diagnostic"),
            LogLevel::Error => tracing::error!(error = %error, code, "Submission diagnostic"),
        }
    }
}

/// Logs user alerts instead of displaying them
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl UserNotifier for TracingNotifier {
    fn alert(&self, message: &str) {
        tracing::warn!(message = %message, "User alert");
    }
}

/// Session with a fixed user email
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    email: Option<String>,
}

impl StaticSession {
    pub fn new(email: Option<String>) -> Self {
        Self { email }
    }
}

impl UserSession for StaticSession {
    fn email(&self) -> Option<String> {
        self.email.clone()
    }
}
