//! Cardápio CLI - submit menu files to the Pigz IA webhook
//!
//! ```bash
//! cardapio submit --api-key KEY --merchant-id ID-PRO-001 menu.pdf foto.jpg
//! cardapio check menu.pdf notas.txt      # which files would be staged
//! cardapio check --json menu.pdf notas.txt
//! ```
//!
//! `PIGZ_API_KEY`, `PIGZ_MERCHANT_ID` and `PIGZ_WEBHOOK_URL` may be set in the
//! environment or in a `.env` file instead of passing flags.

use cardapio::{
    run_submission, AdmissionReport, AttachmentStore, CliError, LocalFile, Notification,
    PathPreviews, Settings, SubmissionController, SubmissionEvent, SubmissionFields, Timing,
    WebhookClient,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cardapio")]
#[command(about = "Send menu artwork and PDFs to the Pigz IA menu webhook", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stage files and submit them to the webhook
    Submit {
        /// Partner API key
        #[arg(long, env = "PIGZ_API_KEY", hide_env_values = true, default_value = "")]
        api_key: String,

        /// Merchant identifier
        #[arg(long, env = "PIGZ_MERCHANT_ID", default_value = "")]
        merchant_id: String,

        /// Expected menu structure (categories, add-ons, ...)
        #[arg(short, long, default_value = "")]
        description: String,

        /// Webhook endpoint (default: PIGZ_WEBHOOK_URL or the built-in URL)
        #[arg(long)]
        webhook_url: Option<String>,

        /// Image or PDF files, in submission order
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show which files would be accepted, without sending anything
    Check {
        /// Candidate files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print the staged and refused files as JSON on stdout
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Submit {
            api_key,
            merchant_id,
            description,
            webhook_url,
            files,
        } => {
            let fields = SubmissionFields {
                api_key,
                merchant_id,
                description,
            };
            cmd_submit(fields, webhook_url, files).await
        }

        Commands::Check { files, json } => cmd_check(files, json),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_submit(
    fields: SubmissionFields,
    webhook_url: Option<String>,
    files: Vec<PathBuf>,
) -> Result<(), CliError> {
    let settings = match webhook_url {
        Some(webhook_url) => Settings { webhook_url },
        None => Settings::from_env(),
    };
    let client = WebhookClient::from_settings(&settings);

    let mut store = AttachmentStore::new(PathPreviews::default());
    for notice in store.admit(files.into_iter().map(LocalFile::new)) {
        print_notification(&notice);
    }

    let mut controller = SubmissionController::with_fields(fields);
    eprintln!("📤 Sending {} file(s) to {}", store.len(), client.url());

    let outcome = run_submission(
        &mut controller,
        &mut store,
        &client,
        Timing::default(),
        |event| match event {
            SubmissionEvent::Progress(p) => eprintln!("   {:>3.0}% concluído", p),
            SubmissionEvent::Notify(notice) => print_notification(&notice),
        },
    )
    .await?;

    if !outcome.is_success() {
        return Err(CliError::Rejected);
    }

    // webhook payload on stdout, everything else on stderr
    if let Some(payload) = outcome.payload() {
        println!("{:#}", payload);
    }
    eprintln!("🔗 Ver produtos: {}", controller.products_url());
    Ok(())
}

fn cmd_check(files: Vec<PathBuf>, json: bool) -> Result<(), CliError> {
    let total = files.len();
    let mut store = AttachmentStore::new(PathPreviews::default());
    let refused = store.admit(files.into_iter().map(LocalFile::new));
    let report = AdmissionReport::new(&store, refused);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for notice in &report.refused {
            print_notification(notice);
        }
        for entry in &report.staged {
            eprintln!("✅ {} ({:?})", entry.name, entry.kind);
        }
    }

    if store.is_empty() {
        return Err(CliError::NothingStaged(total));
    }
    eprintln!("\n{} of {} file(s) would be sent", store.len(), total);
    Ok(())
}

fn print_notification(notice: &Notification) {
    eprintln!("{} {}: {}", notice.severity.emoji(), notice.severity.title(), notice.message);
}
