//! Navigation routes and user-facing strings shared across the workflow.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Message shown when a receipt is not a JPEG or PNG image.
pub const INVALID_RECEIPT_FORMAT_MESSAGE: &str =
    "Format de fichier invalide. Seuls les fichiers JPEG, JPG et PNG sont autorisés.";

/// Receipt extensions accepted by the upload validator (lowercase).
pub const ACCEPTED_RECEIPT_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Receipt content types accepted by the upload validator (lowercase).
///
/// `image/jpg` and `image/pjpeg` are non-standard JPEG labels some hosts declare.
pub const ACCEPTED_RECEIPT_CONTENT_TYPES: [&str; 4] =
    ["image/jpeg", "image/jpg", "image/pjpeg", "image/png"];

/// VAT percentage used when the form field is empty, unparseable or zero.
pub const DEFAULT_VAT_PERCENT: i64 = 20;

/// Well-known navigation targets of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Route {
    Login,
    Bills,
    NewBill,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
            Route::Dashboard => "#admin/dashboard",
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.path())
    }
}
