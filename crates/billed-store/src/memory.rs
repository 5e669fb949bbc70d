use crate::traits::{BillStore, StoreError, StoreResult};
use crate::StoreBackend;
use async_trait::async_trait;
use billed_core::{ExpenseRecord, ReceiptUpload, RemoteArtifactRef};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct StoredBill {
    file_name: String,
    content_type: String,
    size: usize,
    email: Option<String>,
    record: Option<ExpenseRecord>,
}

/// In-memory bill store
///
/// Receipts and bills live for the lifetime of the value. Useful for local runs of
/// the CLI and for exercising the workflow without a bill API.
pub struct InMemoryBillStore {
    base_url: String,
    bills: RwLock<HashMap<String, StoredBill>>,
}

impl InMemoryBillStore {
    /// Create a new InMemoryBillStore
    ///
    /// # Arguments
    /// * `base_url` - Base URL used to build receipt URLs (e.g., "http://localhost:5678/public")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bills: RwLock::new(HashMap::new()),
        }
    }

    fn receipt_url(&self, key: &str, file_name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            key,
            urlencoding::encode(file_name)
        )
    }

    /// Bill persisted under `key`, if `update` was called for it.
    pub async fn get(&self, key: &str) -> Option<ExpenseRecord> {
        self.bills
            .read()
            .await
            .get(key)
            .and_then(|stored| stored.record.clone())
    }

    /// All persisted bills, in no particular order.
    pub async fn bills(&self) -> Vec<ExpenseRecord> {
        self.bills
            .read()
            .await
            .values()
            .filter_map(|stored| stored.record.clone())
            .collect()
    }

    /// Number of receipts uploaded so far.
    pub async fn receipt_count(&self) -> usize {
        self.bills.read().await.len()
    }
}

#[async_trait]
impl BillStore for InMemoryBillStore {
    async fn create(&self, upload: ReceiptUpload) -> StoreResult<RemoteArtifactRef> {
        if upload.data.is_empty() {
            return Err(StoreError::UploadFailed(format!(
                "Receipt {} is empty",
                upload.file_name
            )));
        }

        let key = Uuid::new_v4().to_string();
        let file_url = self.receipt_url(&key, &upload.file_name);

        self.bills.write().await.insert(
            key.clone(),
            StoredBill {
                file_name: upload.file_name.clone(),
                content_type: upload.content_type.clone(),
                size: upload.data.len(),
                email: upload.email,
                record: None,
            },
        );

        tracing::debug!(
            key = %key,
            file_name = %upload.file_name,
            content_type = %upload.content_type,
            "Receipt stored in memory"
        );

        Ok(RemoteArtifactRef { file_url, key })
    }

    async fn update(&self, selector: &str, bill: &ExpenseRecord) -> StoreResult<ExpenseRecord> {
        let mut bills = self.bills.write().await;
        let stored = bills
            .get_mut(selector)
            .ok_or_else(|| StoreError::NotFound(selector.to_string()))?;

        let mut record = bill.clone();
        if record.email.is_none() {
            record.email = stored.email.clone();
        }
        stored.record = Some(record.clone());

        tracing::debug!(
            key = %selector,
            file_name = %stored.file_name,
            content_type = %stored.content_type,
            size = stored.size,
            "Bill stored in memory"
        );

        Ok(record)
    }

    fn backend_type(&self) -> StoreBackend {
        StoreBackend::Memory
    }
}
