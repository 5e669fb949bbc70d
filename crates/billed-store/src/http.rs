//! HTTP bill store backend
//!
//! Talks to the bill API: `POST {base}/bills` with a multipart body to upload a
//! receipt, `PATCH {base}/bills/{key}` with a JSON body to persist the bill.

use crate::{BillStore, StoreBackend, StoreError, StoreResult};
use async_trait::async_trait;
use billed_core::{ExpenseRecord, ReceiptUpload, RemoteArtifactRef};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use std::time::Duration;

/// HTTP client for the bill API.
#[derive(Clone, Debug)]
pub struct HttpBillStore {
    client: Client,
    base_url: String,
}

impl HttpBillStore {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> StoreResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn bills_url(&self) -> String {
        format!("{}/bills", self.base_url)
    }

    fn bill_url(&self, selector: &str) -> String {
        format!("{}/bills/{}", self.base_url, urlencoding::encode(selector))
    }

    /// Turn a non-2xx response into `StoreError::Status`.
    async fn check_status(response: Response) -> StoreResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(StoreError::Status {
            status: status.as_u16(),
            body,
        })
    }

    /// The bill echoed back by the API, or the bill that was sent when the body does
    /// not decode as one. The update already succeeded at this point.
    fn updated_record(body: &str, sent: &ExpenseRecord) -> ExpenseRecord {
        serde_json::from_str(body).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Bill API returned an unreadable bill, keeping the sent one");
            sent.clone()
        })
    }
}

#[async_trait]
impl BillStore for HttpBillStore {
    async fn create(&self, upload: ReceiptUpload) -> StoreResult<RemoteArtifactRef> {
        let part = Part::bytes(upload.data.to_vec())
            .file_name(upload.file_name.clone())
            .mime_str(if upload.content_type.is_empty() {
                "application/octet-stream"
            } else {
                upload.content_type.as_str()
            })
            .map_err(|e| StoreError::UploadFailed(format!("Invalid content type: {}", e)))?;

        let mut form = Form::new().part("file", part);
        if let Some(email) = upload.email {
            form = form.text("email", email);
        }

        let response = self
            .client
            .post(self.bills_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let artifact: RemoteArtifactRef = Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        tracing::debug!(
            key = %artifact.key,
            file_name = %upload.file_name,
            "Receipt uploaded to bill API"
        );

        Ok(artifact)
    }

    async fn update(&self, selector: &str, bill: &ExpenseRecord) -> StoreResult<ExpenseRecord> {
        let response = self
            .client
            .patch(self.bill_url(selector))
            .json(bill)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let body = Self::check_status(response)
            .await?
            .text()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Ok(Self::updated_record(&body, bill))
    }

    fn backend_type(&self) -> StoreBackend {
        StoreBackend::Http
    }
}
