//! Shared test doubles for the new-bill workflow tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use billed_core::{
    ExpenseRecord, FormFields, ReceiptUpload, RemoteArtifactRef, Route, UploadCandidate,
};
use billed_store::{BillStore, StoreBackend, StoreError, StoreResult};
use billed_submission::{
    DiagnosticSink, FileChangeEvent, Navigator, StaticSession, SubmissionCoordinator,
    SubmissionError, UserNotifier,
};

/// How the mock store answers `update`.
#[derive(Debug, Clone)]
pub enum UpdateBehavior {
    Resolve,
    RejectWithStatus(u16),
    NeverResolve,
}

/// Bill store that records every call and answers from canned responses.
pub struct MockBillStore {
    artifact: RemoteArtifactRef,
    fail_create: bool,
    update_behavior: UpdateBehavior,
    pub creates: Mutex<Vec<ReceiptUpload>>,
    pub updates: Mutex<Vec<(String, ExpenseRecord)>>,
}

impl MockBillStore {
    pub fn new() -> Self {
        Self {
            artifact: RemoteArtifactRef {
                file_url: "http://localhost/image.png".to_string(),
                key: "1234".to_string(),
            },
            fail_create: false,
            update_behavior: UpdateBehavior::Resolve,
            creates: Mutex::new(Vec::new()),
            updates: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_create() -> Self {
        Self {
            fail_create: true,
            ..Self::new()
        }
    }

    pub fn with_update(update_behavior: UpdateBehavior) -> Self {
        Self {
            update_behavior,
            ..Self::new()
        }
    }

    pub fn create_calls(&self) -> usize {
        self.creates.lock().unwrap().len()
    }

    pub fn update_calls(&self) -> usize {
        self.updates.lock().unwrap().len()
    }

    pub fn last_update(&self) -> Option<(String, ExpenseRecord)> {
        self.updates.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl BillStore for MockBillStore {
    async fn create(&self, upload: ReceiptUpload) -> StoreResult<RemoteArtifactRef> {
        self.creates.lock().unwrap().push(upload);
        if self.fail_create {
            return Err(StoreError::Status {
                status: 500,
                body: "Erreur 500".to_string(),
            });
        }
        Ok(self.artifact.clone())
    }

    async fn update(&self, selector: &str, bill: &ExpenseRecord) -> StoreResult<ExpenseRecord> {
        self.updates
            .lock()
            .unwrap()
            .push((selector.to_string(), bill.clone()));

        match self.update_behavior {
            UpdateBehavior::Resolve => Ok(bill.clone()),
            UpdateBehavior::RejectWithStatus(status) => Err(StoreError::Status {
                status,
                body: format!("Erreur {}", status),
            }),
            UpdateBehavior::NeverResolve => futures::future::pending().await,
        }
    }

    fn backend_type(&self) -> StoreBackend {
        StoreBackend::Memory
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

#[derive(Default)]
pub struct RecordingDiagnostics {
    pub reports: Mutex<Vec<String>>,
}

impl RecordingDiagnostics {
    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn report(&self, error: &SubmissionError) {
        self.reports.lock().unwrap().push(error.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl UserNotifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

/// A coordinator wired to recording collaborators.
pub struct TestForm {
    pub coordinator: SubmissionCoordinator,
    pub store: Arc<MockBillStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub diagnostics: Arc<RecordingDiagnostics>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestForm {
    pub fn new(store: MockBillStore) -> Self {
        let store = Arc::new(store);
        let navigator = Arc::new(RecordingNavigator::default());
        let diagnostics = Arc::new(RecordingDiagnostics::default());
        let notifier = Arc::new(RecordingNotifier::default());

        let coordinator = SubmissionCoordinator::new(store.clone(), navigator.clone())
            .with_diagnostics(diagnostics.clone())
            .with_notifier(notifier.clone())
            .with_session(Arc::new(StaticSession::new(Some(
                "employee@test.tld".to_string(),
            ))));

        Self {
            coordinator,
            store,
            navigator,
            diagnostics,
            notifier,
        }
    }
}

pub fn file_event(name: &str, content_type: &str) -> FileChangeEvent {
    FileChangeEvent::new(
        format!("C:\\fakepath\\{}", name),
        vec![UploadCandidate::new(&b"test"[..], name, content_type)],
    )
}

pub fn form_fields() -> FormFields {
    FormFields {
        expense_type: "Transports".to_string(),
        expense_name: "Vol Paris Londres".to_string(),
        amount: "50".to_string(),
        date: "2026-10-19".to_string(),
        vat: "20".to_string(),
        pct: "10".to_string(),
        commentary: "Séminaire billed".to_string(),
    }
}
