use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A file picked by the user, before validation.
///
/// Lives only for the duration of one validation: accepted candidates are sent to the
/// store and dropped, rejected ones are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub data: Bytes,
    /// Name declared by the host (e.g. `receipt.png`), without any directory part.
    pub file_name: String,
    /// Declared MIME type. May be empty when the host could not guess one.
    pub content_type: String,
}

impl UploadCandidate {
    pub fn new(
        data: impl Into<Bytes>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            data: data.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
        }
    }

    /// Lowercased extension of the declared name, if it has one.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
    }
}

/// Durable reference to a receipt stored remotely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteArtifactRef {
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    pub key: String,
}

/// An artifact reference waiting to be attached to the next submitted bill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedArtifact {
    pub artifact: RemoteArtifactRef,
    pub file_name: String,
}

impl StagedArtifact {
    pub fn file_url(&self) -> &str {
        &self.artifact.file_url
    }

    pub fn key(&self) -> &str {
        &self.artifact.key
    }
}

/// Payload of the store's create operation.
#[derive(Debug, Clone)]
pub struct ReceiptUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
    /// Email of the connected user, sent alongside the file.
    pub email: Option<String>,
}

impl ReceiptUpload {
    pub fn from_candidate(candidate: &UploadCandidate, email: Option<String>) -> Self {
        Self {
            file_name: candidate.file_name.clone(),
            content_type: candidate.content_type.clone(),
            data: candidate.data.clone(),
            email,
        }
    }
}
