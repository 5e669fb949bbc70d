//! Data models for the expense submission workflow
//!
//! Organized by the stage of the workflow they belong to: file upload, form input
//! and the persisted bill record.

mod bill;
mod form;
mod upload;

// Re-export all models for convenient imports
pub use bill::*;
pub use form::*;
pub use upload::*;
