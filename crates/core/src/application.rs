use crate::domain::ExportDocument;
use crate::error::Result;
use crate::ports::{ExportWriter, Reporter, SessionRepository};

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// Rows were found and the export file was written.
    Exported { sessions: usize, distinct: usize },
    /// The device-session table was empty; nothing was written.
    NoSessions,
}

/// Application service driving the extraction pipeline.
pub struct ExtractionService {
    sessions: Box<dyn SessionRepository>,
    writer: Box<dyn ExportWriter>,
    reporter: Box<dyn Reporter>,
}

impl ExtractionService {
    /// Creates a new service with the given port implementations.
    pub fn new(
        sessions: Box<dyn SessionRepository>,
        writer: Box<dyn ExportWriter>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            sessions,
            writer,
            reporter,
        }
    }

    /// Runs the whole pipeline: connect, query, extract, write.
    ///
    /// The connection is released on every path, including failures. A
    /// close error is reported but never masks the pipeline's own result.
    pub async fn execute(&mut self) -> Result<ExtractionOutcome> {
        self.reporter.starting();
        let outcome = self.run_pipeline().await;
        if let Err(error) = &outcome {
            self.reporter.error(error);
        }
        if let Err(close_error) = self.sessions.close().await {
            self.reporter.error(&close_error);
        }
        self.reporter.finished();
        outcome
    }

    async fn run_pipeline(&mut self) -> Result<ExtractionOutcome> {
        self.sessions.connect().await?;
        self.reporter.connected();

        self.reporter.querying();
        let rows = self.sessions.fetch_all_jids().await?;
        if rows.is_empty() {
            self.reporter.no_sessions();
            return Ok(ExtractionOutcome::NoSessions);
        }
        self.reporter.sessions_found(rows.len());

        let reporter = self.reporter.as_ref();
        let document = ExportDocument::from_rows_with(&rows, |index, record| {
            reporter.record_extracted(index, record);
        });

        self.writer.write(&document)?;
        self.reporter.export_written(document.bots.len());

        Ok(ExtractionOutcome::Exported {
            sessions: rows.len(),
            distinct: document.bots.len(),
        })
    }
}
