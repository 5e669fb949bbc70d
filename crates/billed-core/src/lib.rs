//! Billed Core Library
//!
//! This crate provides the domain models, error metadata, navigation routes and
//! configuration shared by the store backends, the submission workflow and the CLI.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod store_types;

// Re-export commonly used types
pub use config::BilledConfig;
pub use constants::Route;
pub use error::{ErrorMetadata, LogLevel};
pub use models::{
    BillStatus, ExpenseRecord, FieldId, FormFields, ReceiptUpload, RemoteArtifactRef,
    StagedArtifact, UploadCandidate,
};
pub use store_types::StoreBackend;
