use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use billed_core::{FieldId, FormFields, Route, UploadCandidate};
use billed_submission::validator::guess_content_type;
use billed_submission::{Navigator, UserNotifier};

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Read a receipt from disk the way a browser file input would present it.
///
/// The content type is guessed from the extension unless `content_type` is given.
pub async fn read_candidate(path: &Path, content_type: Option<String>) -> Result<UploadCandidate> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Invalid file path: {}", path.display()))?
        .to_string();

    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let content_type = content_type.unwrap_or_else(|| guess_content_type(&file_name).to_string());

    Ok(UploadCandidate::new(data, file_name, content_type))
}

/// Form values keyed by the identifiers the form host uses for its inputs.
pub fn form_fields_json(fields: &FormFields) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = FieldId::ALL
        .iter()
        .map(|id| (id.test_id().to_string(), serde_json::Value::from(fields.get(*id))))
        .collect();
    serde_json::Value::Object(map)
}

/// Remembers where the workflow asked to go; a terminal has nowhere to navigate to.
#[derive(Debug, Default)]
pub struct TerminalNavigator {
    last_route: Mutex<Option<Route>>,
}

impl TerminalNavigator {
    pub fn last_route(&self) -> Option<Route> {
        self.last_route.lock().ok().and_then(|route| *route)
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!(route = %route, "Navigating");
        if let Ok(mut last) = self.last_route.lock() {
            *last = Some(route);
        }
    }
}

/// Prints user alerts on stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl UserNotifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}
