//! # ragstack-cli: A CLI for `ragstack`
//!
//! This is the main entry point for the `ragstack` command-line interface.
//! It drives the same plugins the server exposes: local CSV ingestion and
//! connection probes against live devices.

use anyhow::Result;
use clap::{Parser, Subcommand};
use ragstack::datasource::storage::store_documents;
use ragstack::providers::db::sqlite::SqliteProvider;
use ragstack::text::data_uri;
use ragstack::{
    ActivationOutcome, Connection, ConnectionHandler, DataSource, DataSourceRegistry,
};
use ragstack_csv::{CsvFileSource, DEFAULT_FILE_NAME};
use ragstack_junos::{JunosLogin, JunosLoginConfig};
use serde_json::json;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the registered data sources
    Sources,
    /// Ingest a CSV file through the csv_file data source
    Ingest(IngestArgs),
    /// Probe a connection handler against a live target
    Connect(ConnectArgs),
}

#[derive(Parser, Debug)]
struct IngestArgs {
    /// The path of the CSV file to ingest
    #[arg(long, required = true)]
    file: PathBuf,
    /// A SQLite database path; when given, the documents are stored there
    #[arg(long)]
    db: Option<String>,
}

#[derive(Parser, Debug)]
struct ConnectArgs {
    #[command(subcommand)]
    command: ConnectCommands,
}

#[derive(Subcommand, Debug)]
enum ConnectCommands {
    /// Probe a Junos device login
    Junos(JunosArgs),
}

#[derive(Parser, Debug)]
struct JunosArgs {
    /// Address of the device
    #[arg(long, default_value = "localhost")]
    address: String,
    /// Port of the device's REST service
    #[arg(long, default_value_t = 3000)]
    port: u16,
    /// The login user
    #[arg(long, required = true)]
    username: String,
    /// The login password
    #[arg(long, required = true)]
    password: String,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging to a file, keeping stdout for command output.
    let log_file = File::create("ragstack-cli.log")?;
    let subscriber = fmt::Subscriber::builder()
        .with_writer(Arc::new(log_file))
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match &cli.command {
        Commands::Sources => handle_sources(),
        Commands::Ingest(args) => handle_ingest(args).await?,
        Commands::Connect(args) => match &args.command {
            ConnectCommands::Junos(junos_args) => {
                let active = handle_connect_junos(junos_args).await?;
                if !active {
                    std::process::exit(1);
                }
            }
        },
    }

    Ok(())
}

// --- Command Handlers ---

/// Builds the registry of data sources this build of the CLI ships with.
fn build_data_sources() -> DataSourceRegistry {
    let mut registry = DataSourceRegistry::new();
    registry.register(Arc::new(CsvFileSource::new()));
    registry
}

fn handle_sources() {
    let registry = build_data_sources();
    println!("Registered data sources:");
    for descriptor in registry.descriptors() {
        println!("  {}: {}", descriptor.slug, descriptor.description);
    }
}

async fn handle_ingest(args: &IngestArgs) -> Result<()> {
    let bytes = std::fs::read(&args.file)
        .map_err(|e| anyhow::anyhow!("Failed to read '{}': {e}", args.file.display()))?;
    let file_name = args
        .file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(DEFAULT_FILE_NAME);
    info!("Ingesting '{}' ({} bytes)", file_name, bytes.len());

    let input = json!({ "file": data_uri::build("text/csv", file_name, &bytes) });
    let source = CsvFileSource::new();
    let entries = source.validate_and_process(&input)?;

    let provider = match &args.db {
        Some(db_path) => {
            let provider = SqliteProvider::new(db_path).await?;
            provider.initialize_schema().await?;
            Some(provider)
        }
        None => None,
    };

    let mut total_documents = 0;
    let mut total_stored = 0;
    for entry in &entries {
        let documents = source.documents(entry).await?;
        total_documents += documents.len();
        if let Some(provider) = &provider {
            let mut conn = provider.db.connect()?;
            let ids = store_documents(&mut conn, &documents, &entry.name, None).await?;
            total_stored += ids.len();
        }
    }

    println!("✅ Processed '{file_name}' into {total_documents} document chunks.");
    if let Some(db_path) = &args.db {
        println!("Stored {total_stored} documents in '{db_path}'.");
    }

    Ok(())
}

/// Runs a single Junos login probe. Returns whether the activation
/// succeeded; the process exit code reflects that.
async fn handle_connect_junos(args: &JunosArgs) -> Result<bool> {
    let configuration = serde_json::to_value(JunosLoginConfig {
        address: args.address.clone(),
        port: args.port,
        username: args.username.clone(),
        password: args.password.clone(),
    })?;

    let handler = JunosLogin::new();
    let connection = Connection::new(
        format!("{}@{}", args.username, args.address),
        "",
        handler.provider_slug(),
        handler.slug(),
        handler.kind(),
        configuration,
    );

    info!(address = %args.address, port = args.port, "Probing Junos device");
    println!(
        "Probing {}:{} as '{}'...",
        args.address, args.port, args.username
    );

    match handler.activate(connection).await {
        ActivationOutcome::Active(connection) => {
            println!("✅ ACTIVE: {} ({})", connection.name, connection.id);
            Ok(true)
        }
        ActivationOutcome::Failed { error, .. } => {
            eprintln!("FAILED: {error}");
            Ok(false)
        }
    }
}
