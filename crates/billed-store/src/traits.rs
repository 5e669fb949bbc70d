//! Bill store abstraction trait
//!
//! This module defines the BillStore trait that all store backends must implement.

use crate::StoreBackend;
use async_trait::async_trait;
use billed_core::{ExpenseRecord, ReceiptUpload, RemoteArtifactRef};
use thiserror::Error;

/// Store operation errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Bill not found: {0}")]
    NotFound(String),

    #[error("Store responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid store response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Bill store abstraction trait
///
/// The submission workflow only talks to the store through this trait, so the HTTP
/// backend, the in-memory backend and test doubles are interchangeable.
#[async_trait]
pub trait BillStore: Send + Sync {
    /// Upload a receipt and return its durable reference.
    ///
    /// The returned key is the selector to pass to [`BillStore::update`].
    async fn create(&self, upload: ReceiptUpload) -> StoreResult<RemoteArtifactRef>;

    /// Persist a bill under `selector` and return the stored record
    async fn update(&self, selector: &str, bill: &ExpenseRecord) -> StoreResult<ExpenseRecord>;

    /// Get the store backend type
    fn backend_type(&self) -> StoreBackend;
}
