//! Explicit input payloads for the two form handlers.

use billed_core::{FormFields, UploadCandidate};

/// Cancels the host's native handling of an event (e.g. a browser form post).
pub trait PreventDefault {
    fn prevent_default(&self);
}

impl<F: Fn()> PreventDefault for F {
    fn prevent_default(&self) {
        self()
    }
}

/// A change on the receipt file input.
#[derive(Debug, Clone, Default)]
pub struct FileChangeEvent {
    /// Value displayed by the input (e.g. `C:\fakepath\receipt.png`). Cleared on rejection.
    pub target_value: String,
    pub selected_files: Vec<UploadCandidate>,
}

impl FileChangeEvent {
    pub fn new(target_value: impl Into<String>, selected_files: Vec<UploadCandidate>) -> Self {
        Self {
            target_value: target_value.into(),
            selected_files,
        }
    }

    /// Single-file input: only the first selected file counts.
    pub fn file(&self) -> Option<&UploadCandidate> {
        self.selected_files.first()
    }
}

/// Submission of the new-bill form.
pub struct SubmitEvent<'a> {
    default_action: &'a dyn PreventDefault,
    pub fields: FormFields,
}

impl<'a> SubmitEvent<'a> {
    pub fn new(default_action: &'a dyn PreventDefault, fields: FormFields) -> Self {
        Self {
            default_action,
            fields,
        }
    }

    pub fn prevent_default(&self) {
        self.default_action.prevent_default();
    }
}

impl std::fmt::Debug for SubmitEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmitEvent")
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
