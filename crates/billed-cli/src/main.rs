//! Billed CLI: submit an expense report from the command line.
//!
//! Uses the store configured through the environment (see `BilledConfig`):
//! STORE_BACKEND, BILLED_API_URL (or API_URL), BILLED_USER_EMAIL.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use billed_cli::{
    form_fields_json, init_tracing, read_candidate, TerminalNavigator, TerminalNotifier,
};
use billed_core::constants::INVALID_RECEIPT_FORMAT_MESSAGE;
use billed_core::{BilledConfig, FieldId, FormFields};
use billed_store::create_store;
use billed_submission::{
    FileChangeEvent, ReceiptValidator, StageResult, StaticSession, SubmissionCoordinator,
    SubmissionOutcome, SubmitEvent,
};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "billed", about = "Billed expense report CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a receipt and submit an expense report for it
    Submit {
        /// Path to the receipt (JPEG or PNG)
        file: PathBuf,
        /// Content type of the receipt (guessed from the extension if omitted)
        #[arg(long)]
        content_type: Option<String>,
        /// Email of the employee (defaults to BILLED_USER_EMAIL)
        #[arg(long)]
        email: Option<String>,
        #[command(flatten)]
        bill: BillArgs,
    },
    /// Check whether a file would be accepted as a receipt
    Validate {
        /// Path to the file
        file: PathBuf,
        /// Content type of the file (guessed from the extension if omitted)
        #[arg(long)]
        content_type: Option<String>,
    },
}

#[derive(Args)]
struct BillArgs {
    /// Expense type (e.g. "Transports", "Restaurants et bars")
    #[arg(long = "type")]
    expense_type: String,
    /// Expense name
    #[arg(long)]
    name: String,
    /// Amount including VAT
    #[arg(long)]
    amount: String,
    /// Date of the expense (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// VAT amount
    #[arg(long, default_value = "")]
    vat: String,
    /// VAT percentage
    #[arg(long, default_value = "")]
    pct: String,
    /// Free-form commentary
    #[arg(long, default_value = "")]
    commentary: String,
}

impl BillArgs {
    fn value(&self, id: FieldId) -> &str {
        match id {
            FieldId::ExpenseType => &self.expense_type,
            FieldId::ExpenseName => &self.name,
            FieldId::Amount => &self.amount,
            FieldId::Date => &self.date,
            FieldId::Vat => &self.vat,
            FieldId::Pct => &self.pct,
            FieldId::Commentary => &self.commentary,
        }
    }
}

fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { file, content_type } => {
            let candidate = read_candidate(&file, content_type).await?;
            match ReceiptValidator::new().validate(&candidate) {
                Ok(()) => print_json(&serde_json::json!({
                    "accepted": true,
                    "fileName": candidate.file_name,
                    "contentType": candidate.content_type,
                }))?,
                Err(reason) => {
                    print_json(&serde_json::json!({
                        "accepted": false,
                        "fileName": candidate.file_name,
                        "reason": reason.to_string(),
                        "message": INVALID_RECEIPT_FORMAT_MESSAGE,
                    }))?;
                    std::process::exit(1);
                }
            }
        }
        Commands::Submit {
            file,
            content_type,
            email,
            bill,
        } => {
            let config = BilledConfig::from_env().context("Failed to load configuration")?;
            config.validate()?;
            tracing::info!(
                environment = %config.environment,
                backend = %config.store_backend,
                "Submitting bill"
            );

            let store = create_store(&config).context("Failed to create bill store")?;
            let navigator = Arc::new(TerminalNavigator::default());
            let session = StaticSession::new(email.or_else(|| config.user_email.clone()));

            let mut coordinator = SubmissionCoordinator::new(store, navigator.clone())
                .with_notifier(Arc::new(TerminalNotifier))
                .with_session(Arc::new(session));

            let candidate = read_candidate(&file, content_type).await?;
            let mut change = FileChangeEvent::new(file.display().to_string(), vec![candidate]);

            let staged = match coordinator.handle_change_file(&mut change).await? {
                StageResult::Staged(staged) => staged,
                StageResult::Rejected(reason) => {
                    anyhow::bail!("Receipt rejected: {}", reason);
                }
            };

            let prevent_default = || tracing::debug!("Default form submission prevented");
            let fields = FormFields::from_lookup(|id| Some(bill.value(id).to_string()));
            let submit = SubmitEvent::new(&prevent_default, fields);

            match coordinator.handle_submit(&submit).await {
                SubmissionOutcome::Success(route) => print_json(&serde_json::json!({
                    "submitted": true,
                    "key": staged.key(),
                    "fileUrl": staged.file_url(),
                    "fileName": staged.file_name,
                    "fields": form_fields_json(&submit.fields),
                    "route": route.path(),
                    "navigatedTo": navigator.last_route().map(|r| r.path()),
                }))?,
                SubmissionOutcome::Failure(error) => {
                    return Err(anyhow::Error::new(error).context("Bill submission failed"));
                }
            }
        }
    }

    Ok(())
}
