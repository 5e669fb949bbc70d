//! Receipt validation and upload
//!
//! Pipeline for one file change: pick the selected file → validate → upload → stage.
//! A rejected file never reaches the store.

use std::sync::Arc;

use billed_core::constants::INVALID_RECEIPT_FORMAT_MESSAGE;
use billed_core::{ReceiptUpload, StagedArtifact};
use billed_store::BillStore;

use crate::error::{SubmissionError, SubmissionResult};
use crate::events::FileChangeEvent;
use crate::hooks::{StaticSession, TracingNotifier, UserNotifier, UserSession};
use crate::validator::{ReceiptValidator, ValidationError};

/// What happened to the file picked in a [`FileChangeEvent`].
#[derive(Debug, Clone, PartialEq)]
pub enum StageResult {
    /// Uploaded; the reference is ready to be attached to the bill.
    Staged(StagedArtifact),
    /// Refused locally; the user was alerted and the input cleared.
    Rejected(ValidationError),
}

/// Validates picked receipts and uploads the accepted ones
pub struct UploadStager {
    validator: ReceiptValidator,
    store: Arc<dyn BillStore>,
    notifier: Arc<dyn UserNotifier>,
    session: Arc<dyn UserSession>,
}

impl UploadStager {
    pub fn new(store: Arc<dyn BillStore>) -> Self {
        Self {
            validator: ReceiptValidator::default(),
            store,
            notifier: Arc::new(TracingNotifier),
            session: Arc::new(StaticSession::default()),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn UserNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_session(mut self, session: Arc<dyn UserSession>) -> Self {
        self.session = session;
        self
    }

    /// Validate the selected file and, if accepted, upload it.
    ///
    /// Each call is independent: the same accepted file uploaded twice gives two
    /// store calls. Upload failures are returned as
    /// [`SubmissionError::RemoteUploadFailed`] without retry or user message.
    pub async fn validate_and_stage(
        &self,
        event: &mut FileChangeEvent,
    ) -> SubmissionResult<StageResult> {
        let Some(candidate) = event.file().cloned() else {
            return Ok(self.reject(event, ValidationError::NoFileSelected));
        };

        if let Err(reason) = self.validator.validate(&candidate) {
            return Ok(self.reject(event, reason));
        }

        tracing::debug!(
            file_name = %candidate.file_name,
            content_type = %candidate.content_type,
            size = candidate.data.len(),
            "Receipt accepted, uploading"
        );

        let upload = ReceiptUpload::from_candidate(&candidate, self.session.email());
        let artifact = self
            .store
            .create(upload)
            .await
            .map_err(SubmissionError::RemoteUploadFailed)?;

        tracing::info!(
            key = %artifact.key,
            file_name = %candidate.file_name,
            "Receipt staged"
        );

        Ok(StageResult::Staged(StagedArtifact {
            artifact,
            file_name: candidate.file_name,
        }))
    }

    fn reject(&self, event: &mut FileChangeEvent, reason: ValidationError) -> StageResult {
        tracing::warn!(reason = %reason, "Receipt rejected");
        self.notifier.alert(INVALID_RECEIPT_FORMAT_MESSAGE);
        event.target_value.clear();
        StageResult::Rejected(reason)
    }
}
