use billed_core::constants::{ACCEPTED_RECEIPT_CONTENT_TYPES, ACCEPTED_RECEIPT_EXTENSIONS};
use billed_core::UploadCandidate;
use std::path::Path;

/// Reasons a receipt is refused before any upload
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("Invalid file extension: {extension} (allowed: {allowed:?})")]
    InvalidExtension {
        extension: String,
        allowed: Vec<String>,
    },

    #[error("Invalid content type: {content_type} (allowed: {allowed:?})")]
    InvalidContentType {
        content_type: String,
        allowed: Vec<String>,
    },

    #[error("Content type {content_type} does not match extension '{extension}'")]
    ContentTypeMismatch {
        extension: String,
        content_type: String,
    },
}

/// Expected content types for a file extension, if the extension is known.
pub fn content_types_for_extension(extension: &str) -> Option<&'static [&'static str]> {
    let types: &'static [&'static str] = match extension.to_lowercase().as_str() {
        "jpg" | "jpeg" => &["image/jpeg", "image/jpg", "image/pjpeg"],
        "png" => &["image/png"],
        "gif" => &["image/gif"],
        "webp" => &["image/webp"],
        "bmp" => &["image/bmp"],
        "svg" => &["image/svg+xml"],
        "pdf" => &["application/pdf"],
        "txt" => &["text/plain"],
        "csv" => &["text/csv"],
        "doc" => &["application/msword"],
        "docx" => &["application/vnd.openxmlformats-officedocument.wordprocessingml.document"],
        _ => return None,
    };
    Some(types)
}

/// Best guess of a file's content type from its name, as a browser would declare it.
pub fn guess_content_type(file_name: &str) -> &'static str {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .and_then(content_types_for_extension)
        .and_then(|types| types.first().copied())
        .unwrap_or("application/octet-stream")
}

/// Receipt file validator
///
/// Accepts JPEG and PNG images only. Checks are made on what the host declares (name
/// and content type); file contents are never inspected.
#[derive(Debug, Clone)]
pub struct ReceiptValidator {
    allowed_extensions: Vec<String>,
    allowed_content_types: Vec<String>,
}

impl Default for ReceiptValidator {
    fn default() -> Self {
        Self {
            allowed_extensions: ACCEPTED_RECEIPT_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            allowed_content_types: ACCEPTED_RECEIPT_CONTENT_TYPES
                .iter()
                .map(|ct| ct.to_string())
                .collect(),
        }
    }
}

impl ReceiptValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate file extension, returning it lowercased
    pub fn validate_extension(
        &self,
        candidate: &UploadCandidate,
    ) -> Result<String, ValidationError> {
        let extension = candidate
            .extension()
            .ok_or_else(|| ValidationError::InvalidFilename(candidate.file_name.clone()))?;

        if !self.allowed_extensions.contains(&extension) {
            return Err(ValidationError::InvalidExtension {
                extension,
                allowed: self.allowed_extensions.clone(),
            });
        }

        Ok(extension)
    }

    /// Validate content type
    pub fn validate_content_type(&self, content_type: &str) -> Result<(), ValidationError> {
        let normalized = content_type.to_lowercase();

        if !self
            .allowed_content_types
            .iter()
            .any(|ct| ct == &normalized)
        {
            return Err(ValidationError::InvalidContentType {
                content_type: content_type.to_string(),
                allowed: self.allowed_content_types.clone(),
            });
        }

        Ok(())
    }

    /// Validate that the declared content type matches the file extension
    pub fn validate_extension_content_type_match(
        &self,
        extension: &str,
        content_type: &str,
    ) -> Result<(), ValidationError> {
        let normalized = content_type.to_lowercase();

        let expected = content_types_for_extension(extension).unwrap_or_default();

        if !expected.iter().any(|ct| *ct == normalized) {
            return Err(ValidationError::ContentTypeMismatch {
                extension: extension.to_string(),
                content_type: content_type.to_string(),
            });
        }

        Ok(())
    }

    /// Validate every aspect of a candidate.
    ///
    /// An empty declared content type is decided by the extension alone.
    pub fn validate(&self, candidate: &UploadCandidate) -> Result<(), ValidationError> {
        let extension = self.validate_extension(candidate)?;

        if !candidate.content_type.is_empty() {
            self.validate_content_type(&candidate.content_type)?;
            self.validate_extension_content_type_match(&extension, &candidate.content_type)?;
        }

        Ok(())
    }
}
