use clap::Parser;
use json_adapter::{JsonWriterAdapter, DEFAULT_OUTPUT_PATH};
use lid_core::application::ExtractionService;
use lid_core::ports::{ExportWriter, Reporter, SessionRepository};
use postgres_adapter::PostgresSessionRepository;

mod reporter;

use reporter::ConsoleReporter;

/// CLI tool that reads paired device sessions from PostgreSQL and saves the
/// derived phone-number/identity pairs as a JSON file
#[derive(Parser, Debug)]
#[command(name = "lid-extractor")]
#[command(about = "Exports phone/identity pairs from the device-session table to lid_data.json")]
struct Cli {
    /// Connection string for the session database
    #[arg(long = "database-url", env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Instantiate concrete implementations of the secondary adapters
    let repository: Box<dyn SessionRepository> =
        Box::new(PostgresSessionRepository::new(cli.database_url));
    let writer: Box<dyn ExportWriter> = Box::new(JsonWriterAdapter::new(DEFAULT_OUTPUT_PATH));
    let reporter: Box<dyn Reporter> = Box::new(ConsoleReporter::new(DEFAULT_OUTPUT_PATH));

    let mut service = ExtractionService::new(repository, writer, reporter);

    // The reporter has already printed the failure; exit status is all
    // that is left to signal.
    if service.execute().await.is_err() {
        std::process::exit(1);
    }
}
