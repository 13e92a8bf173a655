use std::path::PathBuf;

use lid_core::domain::ExtractedRecord;
use lid_core::error::ExtractError;
use lid_core::ports::Reporter;

/// Prints run progress to stdout, one line per stage. Errors go to stderr.
pub struct ConsoleReporter {
    output_path: PathBuf,
}

impl ConsoleReporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn starting(&self) {
        println!("Starting LID extraction");
    }

    fn connected(&self) {
        println!("Connected to the session database");
    }

    fn querying(&self) {
        println!("Looking up paired device sessions...");
    }

    fn no_sessions(&self) {
        println!("No sessions found. The bot may not be paired yet.");
    }

    fn sessions_found(&self, count: usize) {
        println!("Found {count} session(s)");
    }

    fn record_extracted(&self, index: usize, record: &ExtractedRecord) {
        println!("  [{}] {} ({})", index + 1, record.phone, record.identity);
    }

    fn export_written(&self, distinct: usize) {
        println!(
            "Saved {} number(s) to {}",
            distinct,
            self.output_path.display()
        );
    }

    fn error(&self, error: &ExtractError) {
        eprintln!("Error during extraction: {error}");
    }

    fn finished(&self) {
        println!("Extractor finished");
    }
}
