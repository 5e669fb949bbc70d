//! Billed Store Library
//!
//! This crate provides the bill store abstraction and its implementations.
//! It includes the `BillStore` trait, an HTTP backend talking to the bill API and
//! an in-memory backend for local runs.
//!
//! # Operations
//!
//! - **create**: upload a receipt, returning `{ fileUrl, key }`
//! - **update**: persist a bill under the key returned by `create`

pub mod factory;
#[cfg(feature = "store-http")]
pub mod http;
#[cfg(feature = "store-memory")]
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use billed_core::StoreBackend;
pub use factory::create_store;
#[cfg(feature = "store-http")]
pub use http::HttpBillStore;
#[cfg(feature = "store-memory")]
pub use memory::InMemoryBillStore;
pub use traits::{BillStore, StoreError, StoreResult};
