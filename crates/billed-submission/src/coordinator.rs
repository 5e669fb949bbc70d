//! New-bill form coordinator
//!
//! One `SubmissionCoordinator` backs one form instance. It owns the receipt staged by
//! the last accepted file change and turns a form submission into a pending bill.
//!
//! Staging takes `&mut self` while submitting takes `&self`, so on a given instance a
//! submit cannot overlap an upload. Two submits can overlap each other and are not
//! deduplicated.

use std::future::Future;
use std::sync::Arc;

use billed_core::{ExpenseRecord, Route, StagedArtifact};
use billed_store::BillStore;

use crate::error::{SubmissionError, SubmissionResult};
use crate::events::{FileChangeEvent, SubmitEvent};
use crate::hooks::{
    DiagnosticSink, Navigator, StaticSession, TracingDiagnostics, UserNotifier, UserSession,
};
use crate::stager::{StageResult, UploadStager};

/// Result of a form submission, for the host to act on
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// The bill was stored and the user was sent to `Route`.
    Success(Route),
    /// The bill was not stored. The form and staged receipt are untouched.
    Failure(SubmissionError),
}

/// State kept between a file change and the submit that follows it.
#[derive(Debug, Default)]
struct PendingSubmission {
    staged: Option<StagedArtifact>,
}

pub struct SubmissionCoordinator {
    stager: UploadStager,
    store: Arc<dyn BillStore>,
    navigator: Arc<dyn Navigator>,
    diagnostics: Arc<dyn DiagnosticSink>,
    session: Arc<dyn UserSession>,
    pending: PendingSubmission,
}

impl SubmissionCoordinator {
    pub fn new(store: Arc<dyn BillStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            stager: UploadStager::new(store.clone()),
            store,
            navigator,
            diagnostics: Arc::new(TracingDiagnostics),
            session: Arc::new(StaticSession::default()),
            pending: PendingSubmission::default(),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn UserNotifier>) -> Self {
        self.stager = self.stager.with_notifier(notifier);
        self
    }

    pub fn with_session(mut self, session: Arc<dyn UserSession>) -> Self {
        self.stager = self.stager.with_session(session.clone());
        self.session = session;
        self
    }

    /// Receipt that the next submit will attach, if any.
    pub fn staged(&self) -> Option<&StagedArtifact> {
        self.pending.staged.as_ref()
    }

    /// Drop the staged receipt, e.g. when the form is abandoned.
    pub fn abandon(&mut self) -> Option<StagedArtifact> {
        self.pending.staged.take()
    }

    /// Handle a change of the receipt file input.
    ///
    /// An accepted file replaces the staged receipt and a rejected one clears it. When
    /// the upload itself fails the error is returned and the previous receipt stays
    /// staged.
    pub async fn handle_change_file(
        &mut self,
        event: &mut FileChangeEvent,
    ) -> SubmissionResult<StageResult> {
        let result = self.stager.validate_and_stage(event).await?;

        match &result {
            StageResult::Staged(staged) => self.pending.staged = Some(staged.clone()),
            StageResult::Rejected(_) => self.pending.staged = None,
        }

        Ok(result)
    }

    /// Handle a submission of the form.
    ///
    /// The default action is prevented and the bill assembled before this returns,
    /// so the caller observes both even if the returned future is never polled. The
    /// future persists the bill, then either navigates to the bills list or reports
    /// the failure to the diagnostic channel. It never panics on a store failure and
    /// does not distinguish between store status codes.
    pub fn handle_submit(
        &self,
        event: &SubmitEvent<'_>,
    ) -> impl Future<Output = SubmissionOutcome> + Send + '_ {
        event.prevent_default();

        let prepared = self.pending.staged.as_ref().map(|staged| {
            let bill = ExpenseRecord::from_form(&event.fields, staged, self.session.email());
            (staged.key().to_string(), bill)
        });

        async move {
            let Some((selector, bill)) = prepared else {
                return self.fail(SubmissionError::NoStagedArtifact);
            };

            match self.store.update(&selector, &bill).await {
                Ok(_) => {
                    tracing::info!(
                        key = %selector,
                        expense_type = %bill.expense_type,
                        amount = ?bill.amount,
                        "Bill submitted"
                    );
                    self.navigator.navigate(Route::Bills);
                    SubmissionOutcome::Success(Route::Bills)
                }
                Err(e) => self.fail(SubmissionError::RemoteUpdateFailed(e)),
            }
        }
    }

    fn fail(&self, error: SubmissionError) -> SubmissionOutcome {
        self.diagnostics.report(&error);
        SubmissionOutcome::Failure(error)
    }
}
