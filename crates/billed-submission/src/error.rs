//! Failure classes of the new-bill workflow.

use billed_core::constants::INVALID_RECEIPT_FORMAT_MESSAGE;
use billed_core::{ErrorMetadata, LogLevel};
use billed_store::StoreError;

use crate::validator::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The picked file is not an accepted receipt. Handled locally.
    #[error("Receipt rejected: {0}")]
    ValidationRejected(#[from] ValidationError),

    /// The store refused the receipt upload. Propagated to the caller.
    #[error("Receipt upload failed: {0}")]
    RemoteUploadFailed(#[source] StoreError),

    /// The store refused the bill. Reported to the diagnostic channel.
    #[error("Bill submission failed: {0}")]
    RemoteUpdateFailed(#[source] StoreError),

    /// Submit was called before any receipt was staged.
    #[error("No receipt has been uploaded for this bill")]
    NoStagedArtifact,
}

pub type SubmissionResult<T> = Result<T, SubmissionError>;

impl ErrorMetadata for SubmissionError {
    fn error_code(&self) -> &'static str {
        match self {
            SubmissionError::ValidationRejected(_) => "VALIDATION_REJECTED",
            SubmissionError::RemoteUploadFailed(_) => "REMOTE_UPLOAD_FAILED",
            SubmissionError::RemoteUpdateFailed(_) => "REMOTE_UPDATE_FAILED",
            SubmissionError::NoStagedArtifact => "NO_STAGED_ARTIFACT",
        }
    }

    // Every class leaves the form usable.
    fn is_recoverable(&self) -> bool {
        true
    }

    fn client_message(&self) -> Option<String> {
        match self {
            SubmissionError::ValidationRejected(_) => {
                Some(INVALID_RECEIPT_FORMAT_MESSAGE.to_string())
            }
            _ => None,
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            SubmissionError::ValidationRejected(_) => LogLevel::Debug,
            SubmissionError::NoStagedArtifact => LogLevel::Warn,
            SubmissionError::RemoteUploadFailed(_) | SubmissionError::RemoteUpdateFailed(_) => {
                LogLevel::Error
            }
        }
    }
}
