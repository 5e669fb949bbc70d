//! Error metadata shared by the workflow crates.
//!
//! Concrete error enums live next to the code that raises them (`StoreError` in
//! `billed-store`, `SubmissionError` in `billed-submission`). This module only
//! defines how an error describes itself to the host: how loudly to log it,
//! whether the user can retry, and what (if anything) to show them.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata describing how an error should be presented and logged
pub trait ErrorMetadata {
    /// Machine-readable error code (e.g., "REMOTE_UPDATE_FAILED")
    fn error_code(&self) -> &'static str;

    /// Whether the user can retry the operation that failed
    fn is_recoverable(&self) -> bool;

    /// Message suitable for the end user, if one should be shown
    fn client_message(&self) -> Option<String>;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}
